use crate::interaction::state::{RotationDescriptor, ScaleDescriptor};
use bevy::prelude::*;
use constants::interaction::SCALE_EASING;

/// One easing step: cover a fixed fraction of the remaining distance.
pub fn ease_toward(current: f32, target: f32) -> f32 {
    current + (target - current) * SCALE_EASING
}

pub fn ease_object_scale(mut objects: Query<(&mut Transform, &ScaleDescriptor)>) {
    for (mut transform, scale) in &mut objects {
        let current = transform.scale.x;
        if (scale.target_scale - current).abs() <= f32::EPSILON {
            continue;
        }
        transform.scale = Vec3::splat(ease_toward(current, scale.target_scale));
    }
}

pub fn rotate_objects(mut objects: Query<(&mut Transform, &RotationDescriptor)>) {
    for (mut transform, rotation) in &mut objects {
        transform.rotate(Quat::from_axis_angle(rotation.axis(), rotation.speed()));
    }
}
