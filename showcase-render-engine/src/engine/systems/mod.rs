//! Per-frame runtime systems.
//!
//! Object animation runs every frame once the scene is live; ambient audio
//! waits for the autoplay gate; FPS is pushed to the host page and, on native
//! builds, drawn in the corner.

/// Looping background audio with the browser autoplay fallback.
pub mod ambient_audio;

/// FPS tracking and notification systems for performance monitoring.
pub mod fps_tracking;

/// Scale easing and constant rotation of showcase objects.
pub mod object_animation;
