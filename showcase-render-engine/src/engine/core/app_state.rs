use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Models keep streaming after this point; only the manifest gates the scene.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.scene_ready() {
        return;
    }

    println!("→ Scene populated, transitioning to Running state");
    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({
            "objects": loading_progress.objects_spawned,
            "models_requested": loading_progress.models_requested,
            "manifest_failed": loading_progress.manifest_failed,
        }),
    );
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn loading_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<LoadingProgress>()
            .init_resource::<WebRpcInterface>()
            .add_systems(
                Update,
                transition_to_running.run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn current(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn stays_loading_until_manifest_resolves() {
        let mut app = loading_app();
        app.update();
        app.update();
        assert_eq!(current(&app), AppState::Loading);
    }

    #[test]
    fn failed_manifest_still_reaches_running() {
        let mut app = loading_app();
        app.world_mut()
            .resource_mut::<LoadingProgress>()
            .manifest_failed = true;
        app.update();
        app.update();
        assert_eq!(current(&app), AppState::Running);
    }
}
