use crate::asset_paths::MANIFEST_PATH;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::environment::request_environment_map;
use crate::engine::scene::object_spawner::spawn_showcase_objects;
use crate::engine::systems::ambient_audio::request_ambient_audio;
use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from: {}", MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

// Populate the scene once the manifest is parsed
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    manifests: Res<Assets<SceneManifest>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.scene_ready() {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        // Keep running with an empty scene rather than stalling on the loading state.
        error!("Failed to load scene manifest {}: {}", MANIFEST_PATH, err);
        loading_progress.manifest_failed = true;
        return;
    }

    let Some(manifest) = manifests.get(handle) else {
        return;
    };
    info!(
        "✓ Scene manifest loaded: {} objects, {} modals",
        manifest.objects.len(),
        manifest.modals.len()
    );

    let summary = spawn_showcase_objects(
        &mut commands,
        &asset_server,
        &mut meshes,
        &mut materials,
        manifest,
    );
    loading_progress.objects_spawned = summary.objects;
    loading_progress.models_requested = summary.models_requested;

    if let Some(environment) = &manifest.environment {
        request_environment_map(&mut commands, &asset_server, environment);
    }
    if let Some(audio) = &manifest.ambient_audio {
        request_ambient_audio(&mut commands, &asset_server, audio);
    }

    commands.insert_resource(manifest.clone());
    loading_progress.manifest_loaded = true;
}
