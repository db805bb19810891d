use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub manifest_failed: bool,
    pub objects_spawned: usize,
    pub models_requested: usize,
    pub models_loaded: usize,
    pub models_failed: usize,
}

impl LoadingProgress {
    /// The scene can run once the manifest resolved either way.
    pub fn scene_ready(&self) -> bool {
        self.manifest_loaded || self.manifest_failed
    }

    pub fn models_pending(&self) -> usize {
        self.models_requested
            .saturating_sub(self.models_loaded + self.models_failed)
    }
}
