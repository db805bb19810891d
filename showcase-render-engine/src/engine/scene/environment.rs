use crate::engine::assets::object_definitions::EnvironmentDefinition;
use crate::engine::loading::model_loader::AssetLoadOutcome;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{TextureViewDescriptor, TextureViewDimension};
use constants::render_settings::{ENVIRONMENT_LIGHT_INTENSITY, SKYBOX_BRIGHTNESS};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentMapState {
    Loading,
    Applied,
    Failed,
}

/// EXR environment map requested by the manifest.
#[derive(Resource, Debug)]
pub struct EnvironmentMap {
    pub handle: Handle<Image>,
    pub skybox: bool,
    pub state: EnvironmentMapState,
}

pub fn request_environment_map(
    commands: &mut Commands,
    asset_server: &AssetServer,
    definition: &EnvironmentDefinition,
) {
    info!("Loading environment map: {}", definition.map);
    commands.insert_resource(EnvironmentMap {
        handle: asset_server.load(&definition.map),
        skybox: definition.skybox,
        state: EnvironmentMapState::Loading,
    });
}

const CUBE_FACES: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubemapLayoutError {
    #[error("image is {width}x{height}, expected six square faces stacked vertically")]
    NotStackedFaces { width: u32, height: u32 },
    #[error("image already has {0} array layers, expected 6")]
    WrongLayerCount(u32),
}

/// Reinterpret a vertically stacked face strip as a cubemap. Images that already
/// carry six layers are only given a cube view.
pub fn reinterpret_as_cubemap(image: &mut Image) -> Result<(), CubemapLayoutError> {
    match image.texture_descriptor.array_layer_count() {
        1 => {
            let (width, height) = (image.width(), image.height());
            if width == 0 || width.checked_mul(CUBE_FACES) != Some(height) {
                return Err(CubemapLayoutError::NotStackedFaces { width, height });
            }
            image.reinterpret_stacked_2d_as_array(CUBE_FACES);
        }
        CUBE_FACES => {}
        layers => return Err(CubemapLayoutError::WrongLayerCount(layers)),
    }
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(())
}

// Once the EXR arrives, attach skybox and image based lighting to the camera.
pub fn apply_environment_map(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    environment: Option<ResMut<EnvironmentMap>>,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    let Some(mut environment) = environment else {
        return;
    };
    if environment.state != EnvironmentMapState::Loading {
        return;
    }
    let Ok(camera) = cameras.single() else {
        return;
    };
    let outcome = AssetLoadOutcome::from(&asset_server.load_state(environment.handle.id()));
    settle_environment_map(
        &mut commands,
        &mut environment,
        outcome,
        &mut images,
        camera,
    );
}

pub fn settle_environment_map(
    commands: &mut Commands,
    environment: &mut EnvironmentMap,
    outcome: AssetLoadOutcome,
    images: &mut Assets<Image>,
    camera: Entity,
) {
    match outcome {
        AssetLoadOutcome::Pending => return,
        AssetLoadOutcome::Failed(reason) => {
            error!("Failed to load environment map: {}", reason);
            environment.state = EnvironmentMapState::Failed;
            return;
        }
        AssetLoadOutcome::Loaded => {}
    }

    let Some(image) = images.get_mut(&environment.handle) else {
        return;
    };
    if let Err(err) = reinterpret_as_cubemap(image) {
        error!("Unusable environment map: {}", err);
        environment.state = EnvironmentMapState::Failed;
        return;
    }

    let handle = environment.handle.clone();
    let mut camera = commands.entity(camera);
    camera.insert(EnvironmentMapLight {
        diffuse_map: handle.clone(),
        specular_map: handle.clone(),
        intensity: ENVIRONMENT_LIGHT_INTENSITY,
        ..default()
    });
    if environment.skybox {
        camera.insert(Skybox {
            image: handle,
            brightness: SKYBOX_BRIGHTNESS,
            rotation: Quat::IDENTITY,
        });
    }

    environment.state = EnvironmentMapState::Applied;
    info!("✓ Environment map applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::ecs::world::CommandQueue;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    fn strip(width: u32, height: u32) -> Image {
        Image::new_fill(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            &[0, 0, 0, 255],
            TextureFormat::Rgba8Unorm,
            RenderAssetUsages::default(),
        )
    }

    struct Fixture {
        world: World,
        images: Assets<Image>,
        environment: EnvironmentMap,
        camera: Entity,
    }

    impl Fixture {
        fn new(image: Image) -> Self {
            let mut world = World::new();
            let camera = world.spawn(Camera3d::default()).id();
            let mut images = Assets::<Image>::default();
            let handle = images.add(image);
            Self {
                world,
                images,
                environment: EnvironmentMap {
                    handle,
                    skybox: true,
                    state: EnvironmentMapState::Loading,
                },
                camera,
            }
        }

        fn settle(&mut self, outcome: AssetLoadOutcome) {
            let mut queue = CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &self.world);
            settle_environment_map(
                &mut commands,
                &mut self.environment,
                outcome,
                &mut self.images,
                self.camera,
            );
            queue.apply(&mut self.world);
        }

        fn camera_has_lighting(&self) -> bool {
            let camera = self.world.entity(self.camera);
            camera.contains::<EnvironmentMapLight>() || camera.contains::<Skybox>()
        }
    }

    #[test]
    fn stacked_faces_become_a_cube() {
        let mut image = strip(4, 24);
        assert_eq!(reinterpret_as_cubemap(&mut image), Ok(()));
        assert_eq!(image.texture_descriptor.array_layer_count(), 6);
        assert_eq!(image.height(), 4);
        assert_eq!(
            image
                .texture_view_descriptor
                .as_ref()
                .and_then(|view| view.dimension),
            Some(TextureViewDimension::Cube)
        );
    }

    #[test]
    fn equirectangular_image_is_rejected_without_panicking() {
        let mut image = strip(8, 4);
        assert_eq!(
            reinterpret_as_cubemap(&mut image),
            Err(CubemapLayoutError::NotStackedFaces {
                width: 8,
                height: 4
            })
        );
        assert_eq!(image.texture_descriptor.array_layer_count(), 1);
        assert!(image.texture_view_descriptor.is_none());
    }

    #[test]
    fn tall_strip_with_wrong_face_count_is_rejected() {
        let mut image = strip(4, 20);
        assert!(reinterpret_as_cubemap(&mut image).is_err());
        assert_eq!(image.texture_descriptor.array_layer_count(), 1);
    }

    #[test]
    fn failed_load_marks_map_failed_and_leaves_camera_untouched() {
        let mut fixture = Fixture::new(strip(4, 24));
        fixture.settle(AssetLoadOutcome::Failed("no such file".into()));

        assert_eq!(fixture.environment.state, EnvironmentMapState::Failed);
        assert!(!fixture.camera_has_lighting());
    }

    #[test]
    fn unusable_layout_marks_map_failed() {
        let mut fixture = Fixture::new(strip(8, 4));
        fixture.settle(AssetLoadOutcome::Loaded);

        assert_eq!(fixture.environment.state, EnvironmentMapState::Failed);
        assert!(!fixture.camera_has_lighting());
    }

    #[test]
    fn pending_load_changes_nothing() {
        let mut fixture = Fixture::new(strip(4, 24));
        fixture.settle(AssetLoadOutcome::Pending);

        assert_eq!(fixture.environment.state, EnvironmentMapState::Loading);
        assert!(!fixture.camera_has_lighting());
    }

    #[test]
    fn loaded_map_lights_camera_and_sets_skybox() {
        let mut fixture = Fixture::new(strip(4, 24));
        fixture.settle(AssetLoadOutcome::Loaded);

        assert_eq!(fixture.environment.state, EnvironmentMapState::Applied);
        let camera = fixture.world.entity(fixture.camera);
        assert_eq!(
            camera.get::<EnvironmentMapLight>().map(|light| light.intensity),
            Some(ENVIRONMENT_LIGHT_INTENSITY)
        );
        assert!(camera.contains::<Skybox>());
    }
}
