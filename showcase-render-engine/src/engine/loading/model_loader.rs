use crate::engine::loading::progress::LoadingProgress;
use crate::interaction::state::ShowcaseObject;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// glTF still being fetched for this object.
#[derive(Component, Debug, Clone)]
pub struct PendingModel {
    pub handle: Handle<Gltf>,
    pub path: String,
}

/// Object whose model could not be loaded. The entity stays in the scene.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ModelLoadFailed {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadOutcome {
    Pending,
    Loaded,
    Failed(String),
}

impl From<&LoadState> for AssetLoadOutcome {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => Self::Loaded,
            LoadState::Failed(err) => Self::Failed(err.to_string()),
            LoadState::NotLoaded | LoadState::Loading => Self::Pending,
        }
    }
}

// Polls every pending model and settles it once the asset server has an answer.
pub fn track_model_loads(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    pending: Query<(Entity, &ShowcaseObject, &PendingModel)>,
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (entity, object, model) in &pending {
        let outcome = AssetLoadOutcome::from(&asset_server.load_state(model.handle.id()));
        settle_model_load(
            &mut commands,
            entity,
            &object.name,
            model,
            outcome,
            &mut loading_progress,
            &mut rpc_interface,
        );
    }
}

pub fn settle_model_load(
    commands: &mut Commands,
    entity: Entity,
    name: &str,
    model: &PendingModel,
    outcome: AssetLoadOutcome,
    loading_progress: &mut LoadingProgress,
    rpc_interface: &mut WebRpcInterface,
) {
    match outcome {
        AssetLoadOutcome::Pending => {}
        AssetLoadOutcome::Loaded => {
            info!("✓ Model loaded for '{}' ({})", name, model.path);
            loading_progress.models_loaded += 1;
            commands.entity(entity).remove::<PendingModel>();
        }
        AssetLoadOutcome::Failed(reason) => {
            error!("Failed to load model for '{}' ({}): {}", name, model.path, reason);
            loading_progress.models_failed += 1;
            rpc_interface.send_notification(
                "model_load_failed",
                serde_json::json!({ "name": name, "path": model.path, "reason": reason }),
            );
            commands
                .entity(entity)
                .remove::<(PendingModel, SceneRoot)>()
                .insert(ModelLoadFailed {
                    path: model.path.clone(),
                    reason,
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::CommandQueue;

    fn pending(path: &str) -> PendingModel {
        PendingModel {
            handle: Handle::default(),
            path: path.to_string(),
        }
    }

    fn settle(world: &mut World, entity: Entity, outcome: AssetLoadOutcome) -> LoadingProgress {
        let mut progress = LoadingProgress::default();
        let mut rpc = WebRpcInterface::default();
        let model = world.get::<PendingModel>(entity).unwrap().clone();

        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, world);
        settle_model_load(
            &mut commands,
            entity,
            "chair",
            &model,
            outcome,
            &mut progress,
            &mut rpc,
        );
        queue.apply(world);
        progress
    }

    #[test]
    fn in_flight_states_stay_pending() {
        assert_eq!(
            AssetLoadOutcome::from(&LoadState::Loading),
            AssetLoadOutcome::Pending
        );
        assert_eq!(
            AssetLoadOutcome::from(&LoadState::NotLoaded),
            AssetLoadOutcome::Pending
        );
        assert_eq!(
            AssetLoadOutcome::from(&LoadState::Loaded),
            AssetLoadOutcome::Loaded
        );
    }

    #[test]
    fn failed_load_is_logged_and_entity_survives() {
        let mut world = World::new();
        let entity = world
            .spawn((
                ShowcaseObject {
                    name: "chair".into(),
                },
                Transform::default(),
                pending("models/chair.glb"),
            ))
            .id();

        let progress = settle(
            &mut world,
            entity,
            AssetLoadOutcome::Failed("file not found".into()),
        );

        assert_eq!(progress.models_failed, 1);
        let entity_ref = world.entity(entity);
        assert!(entity_ref.contains::<ShowcaseObject>());
        assert!(entity_ref.contains::<Transform>());
        assert!(!entity_ref.contains::<PendingModel>());
        assert_eq!(
            entity_ref.get::<ModelLoadFailed>(),
            Some(&ModelLoadFailed {
                path: "models/chair.glb".into(),
                reason: "file not found".into()
            })
        );
    }

    #[test]
    fn loaded_model_clears_pending_marker() {
        let mut world = World::new();
        let entity = world
            .spawn((
                ShowcaseObject {
                    name: "chair".into(),
                },
                pending("models/chair.glb"),
            ))
            .id();

        let progress = settle(&mut world, entity, AssetLoadOutcome::Loaded);

        assert_eq!(progress.models_loaded, 1);
        assert!(!world.entity(entity).contains::<PendingModel>());
        assert!(!world.entity(entity).contains::<ModelLoadFailed>());
    }
}
