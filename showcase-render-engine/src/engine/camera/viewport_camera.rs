use super::edge_pan::edge_pan_yaw_delta;
use crate::ui::modal::ModalState;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::*;

#[derive(Resource, Debug, Clone)]
pub struct ViewportCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(START_POSITION),
            yaw: 0.0,
            pitch: START_PITCH,
        }
    }
}

impl ViewportCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation())
    }

    pub fn look(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * LOOK_YAW_SENSITIVITY;
        self.pitch = (self.pitch - mouse_delta.y * LOOK_PITCH_SENSITIVITY).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Move along the view axes. `input` is (right, up, back) in camera space.
    pub fn fly(&mut self, input: Vec3, distance: f32) {
        if input == Vec3::ZERO {
            return;
        }
        let rotation = self.rotation();
        let right = rotation * Vec3::X;
        let back = rotation * Vec3::Z;
        let world_delta = right * input.x + Vec3::Y * input.y + back * input.z;
        self.position += world_delta.normalize() * distance;
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    modal: Res<ModalState>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Navigation pauses while a modal is being read.
    if !modal.is_open() {
        let looking = mouse_button.pressed(MouseButton::Right);
        if looking && mouse_delta != Vec2::ZERO {
            viewport_camera.look(mouse_delta);
        }

        if !looking {
            if let Ok(window) = windows.single() {
                if let Some(cursor) = window.cursor_position() {
                    let normalized_x = cursor.x / window.width();
                    viewport_camera.yaw += edge_pan_yaw_delta(normalized_x);
                }
            }
        }

        if scroll_accum.abs() > f32::EPSILON {
            viewport_camera.fly(Vec3::NEG_Z, scroll_accum * DOLLY_SPEED);
        }

        let mut move_input = Vec3::ZERO;
        if keyboard.pressed(KeyCode::KeyW) { move_input.z -= 1.0; }
        if keyboard.pressed(KeyCode::KeyS) { move_input.z += 1.0; }
        if keyboard.pressed(KeyCode::KeyD) { move_input.x += 1.0; }
        if keyboard.pressed(KeyCode::KeyA) { move_input.x -= 1.0; }
        if keyboard.pressed(KeyCode::KeyE) { move_input.y += 1.0; } // Up
        if keyboard.pressed(KeyCode::KeyQ) { move_input.y -= 1.0; } // Down

        let mut speed = FLY_SPEED;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) { speed *= 3.5; }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) { speed *= 0.25; }
        viewport_camera.fly(move_input, speed * time.delta_secs());
    }

    let target = viewport_camera.transform();
    let lerp_speed = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}
