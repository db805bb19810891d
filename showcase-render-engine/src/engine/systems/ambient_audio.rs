use crate::engine::assets::object_definitions::AmbientAudioDefinition;
use bevy::audio::Volume;
use bevy::prelude::*;

/// Browsers refuse to start audio before the visitor interacts with the page.
/// Native builds may play immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayGate {
    requires_gesture: bool,
    gesture_seen: bool,
}

impl AutoplayGate {
    pub fn new(requires_gesture: bool) -> Self {
        Self {
            requires_gesture,
            gesture_seen: false,
        }
    }

    pub fn for_platform() -> Self {
        Self::new(cfg!(target_arch = "wasm32"))
    }

    pub fn register_gesture(&mut self) {
        self.gesture_seen = true;
    }

    pub fn may_play(&self) -> bool {
        !self.requires_gesture || self.gesture_seen
    }
}

/// Looping background track requested by the manifest.
#[derive(Resource, Debug)]
pub struct AmbientAudio {
    pub source: Handle<AudioSource>,
    pub volume: f32,
    pub gate: AutoplayGate,
    pub started: bool,
}

#[derive(Component)]
pub struct AmbientAudioPlayer;

pub fn request_ambient_audio(
    commands: &mut Commands,
    asset_server: &AssetServer,
    definition: &AmbientAudioDefinition,
) {
    info!("Loading ambient audio: {}", definition.path);
    commands.insert_resource(AmbientAudio {
        source: asset_server.load(&definition.path),
        volume: definition.volume,
        gate: AutoplayGate::for_platform(),
        started: false,
    });
}

// Starts the loop as soon as the autoplay gate allows it.
pub fn start_ambient_audio(
    mut commands: Commands,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    audio: Option<ResMut<AmbientAudio>>,
) {
    let Some(mut audio) = audio else {
        return;
    };
    if audio.started {
        return;
    }

    if mouse_button.get_just_pressed().next().is_some()
        || keyboard.get_just_pressed().next().is_some()
    {
        audio.gate.register_gesture();
    }
    if !audio.gate.may_play() {
        return;
    }

    commands.spawn((
        AmbientAudioPlayer,
        Name::new("AmbientAudio"),
        AudioPlayer::new(audio.source.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(audio.volume)),
    ));
    audio.started = true;
    info!("Ambient audio started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_gate_waits_for_first_gesture() {
        let mut gate = AutoplayGate::new(true);
        assert!(!gate.may_play());
        gate.register_gesture();
        assert!(gate.may_play());
    }

    #[test]
    fn native_gate_plays_immediately() {
        assert!(AutoplayGate::new(false).may_play());
    }

    fn audio_app(requires_gesture: bool) -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(AmbientAudio {
                source: Handle::default(),
                volume: 0.5,
                gate: AutoplayGate::new(requires_gesture),
                started: false,
            })
            .add_systems(Update, start_ambient_audio);
        app
    }

    fn player_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<AmbientAudioPlayer>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn blocked_autoplay_defers_to_first_click() {
        let mut app = audio_app(true);
        app.update();
        assert_eq!(player_count(&mut app), 0);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();
        assert_eq!(player_count(&mut app), 1);

        // Further clicks never spawn a second loop.
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Right);
        app.update();
        assert_eq!(player_count(&mut app), 1);
    }
}
