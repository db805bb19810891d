use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::track_model_loads;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::environment::apply_environment_map;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::ambient_audio::start_ambient_audio;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::object_animation::{ease_object_scale, rotate_objects};
// Interaction, UI and Web RPC
use crate::interaction::InteractionPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::ShowcaseUiPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

const LOG_FILTER: &str = "wgpu=error,naga=warn,bevy_render=warn,showcase_render_engine=info";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(InteractionPlugin)
        .add_plugins(ShowcaseUiPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ViewportCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    let runtime_systems = (
        camera_controller,
        ease_object_scale,
        rotate_objects,
        track_model_loads,
        apply_environment_map,
        start_ambient_audio,
        fps_notification_system,
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((Camera3d::default(), ViewportCamera::default().transform()));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== INTERACTIVE SHOWCASE ===");
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
