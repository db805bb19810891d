//! Shared tunables for the showcase engine.

pub mod camera;
pub mod interaction;
pub mod render_settings;
pub mod ui_palette;
