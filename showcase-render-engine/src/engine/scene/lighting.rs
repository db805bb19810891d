use bevy::prelude::*;
use constants::render_settings::DIRECTIONAL_LIGHT_ILLUMINANCE;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("SunLight"),
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
