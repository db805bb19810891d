/// Normalized horizontal margin at each screen edge that triggers yaw panning.
pub const EDGE_PAN_MARGIN: f32 = 0.05;

/// Yaw change applied per frame while the cursor sits inside an edge margin (radians).
pub const EDGE_PAN_SPEED: f32 = 0.01;

pub const LOOK_YAW_SENSITIVITY: f32 = 0.0035;
pub const LOOK_PITCH_SENSITIVITY: f32 = 0.0030;

/// Pitch limits keep the camera from flipping over the poles.
pub const PITCH_MIN: f32 = -1.2;
pub const PITCH_MAX: f32 = 1.2;

pub const FLY_SPEED: f32 = 4.0;
pub const DOLLY_SPEED: f32 = 0.6;

/// Exponential smoothing factor per second for camera transform interpolation.
pub const CAMERA_LERP_SPEED: f32 = 12.0;

/// Initial camera placement.
pub const START_POSITION: [f32; 3] = [0.0, 1.6, 8.0];
pub const START_PITCH: f32 = -0.08;
