//! Viewport camera: free look, fly movement and edge panning.

/// Yaw nudge applied while the cursor rests near a screen edge.
pub mod edge_pan;

/// Camera resource and the per-frame controller system.
pub mod viewport_camera;
