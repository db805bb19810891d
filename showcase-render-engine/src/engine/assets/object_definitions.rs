use crate::interaction::actions::{InteractionAction, ScaleLevel};
use bevy::prelude::Vec3;
use constants::interaction::{
    DEFAULT_BASE_SCALE, DEFAULT_CLICK_SCALE, DEFAULT_HOVER_SCALE, DEFAULT_PICK_SIZE,
};
use serde::{Deserialize, Serialize};

/// Geometry backing a showcase object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectModel {
    /// glTF/GLB file relative to the asset root, spawning the given scene index.
    Gltf {
        path: String,
        #[serde(default)]
        scene: usize,
    },
    /// Procedural sphere, used for portals such as the exit.
    Sphere {
        radius: f32,
        colour: [f32; 3],
        #[serde(default)]
        emissive: bool,
    },
}

/// Base, hover and click scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub base: f32,
    pub hover: f32,
    pub click: f32,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_SCALE,
            hover: DEFAULT_HOVER_SCALE,
            click: DEFAULT_CLICK_SCALE,
        }
    }
}

impl ScaleFactors {
    pub fn levels(&self) -> [(ScaleLevel, f32); 3] {
        [
            (ScaleLevel::Base, self.base),
            (ScaleLevel::Hover, self.hover),
            (ScaleLevel::Click, self.click),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationDefinition {
    pub axis: [f32; 3],
    /// Radians per frame.
    pub speed: f32,
}

/// One interactive object as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseObjectDefinition {
    pub name: String,
    pub model: ObjectModel,
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw_degrees: f32,
    #[serde(default)]
    pub scale: ScaleFactors,
    #[serde(default)]
    pub rotation: Option<RotationDefinition>,
    #[serde(default = "default_pick_size")]
    pub pick_size: [f32; 3],
    #[serde(default = "default_interactable")]
    pub interactable: bool,
    #[serde(default = "default_hover_enter")]
    pub on_hover_enter: Option<Vec<InteractionAction>>,
    #[serde(default = "default_hover_exit")]
    pub on_hover_exit: Option<Vec<InteractionAction>>,
    #[serde(default = "default_click")]
    pub on_click: Option<Vec<InteractionAction>>,
}

impl ShowcaseObjectDefinition {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn pick_size(&self) -> Vec3 {
        Vec3::from_array(self.pick_size)
    }

    /// Every action reachable from this object's handlers.
    pub fn actions(&self) -> impl Iterator<Item = &InteractionAction> {
        [&self.on_hover_enter, &self.on_hover_exit, &self.on_click]
            .into_iter()
            .flatten()
            .flatten()
    }
}

fn default_pick_size() -> [f32; 3] {
    DEFAULT_PICK_SIZE
}

fn default_interactable() -> bool {
    true
}

fn default_hover_enter() -> Option<Vec<InteractionAction>> {
    Some(InteractionAction::default_hover_enter())
}

fn default_hover_exit() -> Option<Vec<InteractionAction>> {
    Some(InteractionAction::default_hover_exit())
}

fn default_click() -> Option<Vec<InteractionAction>> {
    Some(InteractionAction::default_click())
}

/// Image based lighting and skybox source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDefinition {
    /// EXR with six cubemap faces stacked vertically.
    pub map: String,
    #[serde(default = "default_skybox")]
    pub skybox: bool,
}

fn default_skybox() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientAudioDefinition {
    pub path: String,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    0.5
}

/// Informational panel content keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalDefinition {
    pub id: String,
    pub title: String,
    pub body: String,
}
