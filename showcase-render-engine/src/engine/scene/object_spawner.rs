use crate::engine::assets::object_definitions::{ObjectModel, ShowcaseObjectDefinition};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::model_loader::PendingModel;
use crate::interaction::state::{
    Interactable, InteractionHandlers, PickBounds, RotationDescriptor, ScaleDescriptor,
    ShowcaseObject,
};
use bevy::gltf::{Gltf, GltfAssetLabel};
use bevy::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSummary {
    pub objects: usize,
    pub models_requested: usize,
}

/// Spawn every valid manifest object with its interaction components.
pub fn spawn_showcase_objects(
    commands: &mut Commands,
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    manifest: &SceneManifest,
) -> SpawnSummary {
    let mut summary = SpawnSummary::default();

    for definition in manifest.valid_objects() {
        let mut entity = commands.spawn(object_components(definition));
        if let Some(rotation) = rotation_component(definition) {
            entity.insert(rotation);
        }

        match &definition.model {
            ObjectModel::Gltf { path, scene } => {
                let scene_handle =
                    asset_server.load(GltfAssetLabel::Scene(*scene).from_asset(path.clone()));
                let gltf_handle: Handle<Gltf> = asset_server.load(path.clone());
                entity.insert((
                    SceneRoot(scene_handle),
                    PendingModel {
                        handle: gltf_handle,
                        path: path.clone(),
                    },
                ));
                summary.models_requested += 1;
            }
            ObjectModel::Sphere {
                radius,
                colour,
                emissive,
            } => {
                let colour = Color::srgb(colour[0], colour[1], colour[2]);
                let material = StandardMaterial {
                    base_color: colour,
                    emissive: if *emissive {
                        colour.to_linear() * 4.0
                    } else {
                        LinearRgba::BLACK
                    },
                    ..default()
                };
                entity.insert((
                    Mesh3d(meshes.add(Sphere::new(*radius).mesh().uv(32, 18))),
                    MeshMaterial3d(materials.add(material)),
                ));
            }
        }

        summary.objects += 1;
    }

    info!(
        "Spawned {} showcase objects ({} models requested)",
        summary.objects, summary.models_requested
    );
    summary
}

/// Components shared by every object regardless of its geometry.
pub fn object_components(
    definition: &ShowcaseObjectDefinition,
) -> (
    ShowcaseObject,
    Name,
    Transform,
    Visibility,
    Interactable,
    ScaleDescriptor,
    PickBounds,
    InteractionHandlers,
) {
    let scale = ScaleDescriptor::new(
        definition.scale.base,
        definition.scale.hover,
        definition.scale.click,
    );
    let transform = Transform::from_translation(definition.position())
        .with_rotation(Quat::from_rotation_y(definition.yaw_degrees.to_radians()))
        .with_scale(Vec3::splat(scale.base));

    (
        ShowcaseObject {
            name: definition.name.clone(),
        },
        Name::new(definition.name.clone()),
        transform,
        Visibility::default(),
        Interactable {
            enabled: definition.interactable,
        },
        scale,
        PickBounds(definition.pick_size()),
        InteractionHandlers {
            on_hover_enter: definition.on_hover_enter.clone(),
            on_hover_exit: definition.on_hover_exit.clone(),
            on_click: definition.on_click.clone(),
        },
    )
}

/// Rotation is optional and inserted separately so unrotated objects skip the spin system.
pub fn rotation_component(definition: &ShowcaseObjectDefinition) -> Option<RotationDescriptor> {
    let rotation = definition.rotation.as_ref()?;
    RotationDescriptor::new(Vec3::from_array(rotation.axis), rotation.speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(json: &str) -> ShowcaseObjectDefinition {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn object_components_start_at_base_scale() {
        let definition = definition(
            r#"{
                "name": "vase",
                "model": { "kind": "gltf", "path": "models/vase.glb" },
                "position": [1.0, 0.0, 2.0],
                "scale": { "base": 0.5, "hover": 0.6, "click": 0.7 },
                "pick_size": [0.4, 0.8, 0.4]
            }"#,
        );

        let (object, _, transform, _, interactable, scale, PickBounds(size), handlers) =
            object_components(&definition);

        assert_eq!(object.name, "vase");
        assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(transform.scale, Vec3::splat(0.5));
        assert!(interactable.enabled);
        assert_eq!(scale.target_scale, 0.5);
        assert_eq!(size, Vec3::new(0.4, 0.8, 0.4));
        assert!(handlers.on_click.is_some());
    }

    #[test]
    fn rotation_component_requires_a_definition() {
        let still = definition(
            r#"{ "name": "a", "model": { "kind": "sphere", "radius": 1.0, "colour": [1, 1, 1] }, "position": [0, 0, 0] }"#,
        );
        assert!(rotation_component(&still).is_none());

        let spinning = definition(
            r#"{ "name": "b", "model": { "kind": "sphere", "radius": 1.0, "colour": [1, 1, 1] }, "position": [0, 0, 0],
                 "rotation": { "axis": [0, 0, 5], "speed": 0.03 } }"#,
        );
        let rotation = rotation_component(&spinning).unwrap();
        assert_eq!(rotation.axis(), Vec3::Z);
    }
}
