/// Fraction of the remaining distance to the target scale covered each frame.
pub const SCALE_EASING: f32 = 0.1;

/// Scale factors used when the manifest does not provide its own.
pub const DEFAULT_BASE_SCALE: f32 = 1.0;
pub const DEFAULT_HOVER_SCALE: f32 = 1.15;
pub const DEFAULT_CLICK_SCALE: f32 = 1.3;

/// Pick volume used when an object has no explicit bounds.
pub const DEFAULT_PICK_SIZE: [f32; 3] = [1.0, 1.0, 1.0];
