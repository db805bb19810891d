//! Scene content loaded from the JSON manifest.

/// Object, modal, environment and audio definitions referenced by the manifest.
pub mod object_definitions;

/// Manifest asset type and per-object validation.
pub mod scene_manifest;
