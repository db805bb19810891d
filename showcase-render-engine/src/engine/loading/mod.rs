//! Asset loading and initialisation systems for the showcase scene.
//!
//! The manifest is fetched first; once parsed it spawns the objects and kicks
//! off model, environment and audio loads. Model loads settle independently
//! and never block the scene from running.

/// Scene manifest loading and scene population.
pub mod manifest_loader;

/// glTF load tracking with log-and-continue failure handling.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
