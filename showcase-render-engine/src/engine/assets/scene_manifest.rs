use crate::engine::assets::object_definitions::{
    AmbientAudioDefinition, EnvironmentDefinition, ModalDefinition, ShowcaseObjectDefinition,
};
use crate::interaction::actions::{InteractionAction, ScaleLevel};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Reasons an object declared in the manifest cannot be spawned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifestError {
    #[error("object name '{0}' is declared more than once")]
    DuplicateObject(String),
    #[error("object '{object}' has non-positive {level:?} scale {value}")]
    NonPositiveScale {
        object: String,
        level: ScaleLevel,
        value: f32,
    },
    #[error("object '{object}' has a zero-length rotation axis")]
    ZeroRotationAxis { object: String },
    #[error("object '{object}' references unknown modal '{modal}'")]
    UnknownModal { object: String, modal: String },
}

/// Complete scene description as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    #[serde(default)]
    pub objects: Vec<ShowcaseObjectDefinition>,
    #[serde(default)]
    pub modals: Vec<ModalDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_audio: Option<AmbientAudioDefinition>,
}

impl SceneManifest {
    pub fn modal(&self, id: &str) -> Option<&ModalDefinition> {
        self.modals.iter().find(|modal| modal.id == id)
    }

    pub fn object(&self, name: &str) -> Option<&ShowcaseObjectDefinition> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Check a single object against the rest of the manifest.
    pub fn validate_object(&self, object: &ShowcaseObjectDefinition) -> Result<(), ManifestError> {
        for (level, value) in object.scale.levels() {
            if value <= 0.0 {
                return Err(ManifestError::NonPositiveScale {
                    object: object.name.clone(),
                    level,
                    value,
                });
            }
        }

        if let Some(rotation) = &object.rotation {
            if Vec3::from_array(rotation.axis).length_squared() <= f32::EPSILON {
                return Err(ManifestError::ZeroRotationAxis {
                    object: object.name.clone(),
                });
            }
        }

        for action in object.actions() {
            if let InteractionAction::OpenModal { modal } = action {
                if self.modal(modal).is_none() {
                    return Err(ManifestError::UnknownModal {
                        object: object.name.clone(),
                        modal: modal.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Objects that pass validation, logging the ones that are skipped.
    /// The first declaration of a duplicated name wins.
    pub fn valid_objects(&self) -> Vec<&ShowcaseObjectDefinition> {
        let mut seen = HashSet::new();
        let mut valid = Vec::with_capacity(self.objects.len());

        for object in &self.objects {
            let result = if seen.insert(object.name.as_str()) {
                self.validate_object(object)
            } else {
                Err(ManifestError::DuplicateObject(object.name.clone()))
            };

            match result {
                Ok(()) => valid.push(object),
                Err(e) => warn!("Skipping manifest object: {}", e),
            }
        }

        valid
    }
}
