/// Brightness applied to the EXR skybox.
pub const SKYBOX_BRIGHTNESS: f32 = 1000.0;

/// Intensity of the image based lighting sourced from the environment map.
pub const ENVIRONMENT_LIGHT_INTENSITY: f32 = 900.0;

pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 4_000.0;

/// Frame-time window after which FPS is reported to the host page (seconds).
pub const FPS_NOTIFICATION_INTERVAL: f32 = 0.5;
