//! Scene population: lights, environment map and showcase objects.

/// EXR environment map applied as skybox and image based lighting.
pub mod environment;

/// Directional key light.
pub mod lighting;

/// Manifest objects turned into entities with interaction components.
pub mod object_spawner;
