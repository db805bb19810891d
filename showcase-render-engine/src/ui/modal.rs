use super::inventory::Inventory;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::ui_palette::*;

/// Request to show or dismiss the informational panel.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum ModalRequest {
    Open { modal_id: String },
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// The modal currently on screen, if any. At most one is open at a time.
#[derive(Resource, Debug, Default)]
pub struct ModalState {
    open: Option<OpenModal>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenModal> {
        self.open.as_ref()
    }

    pub fn open(&mut self, modal: OpenModal) {
        self.open = Some(modal);
    }

    pub fn close(&mut self) -> Option<OpenModal> {
        self.open.take()
    }
}

#[derive(Component)]
pub struct ModalRoot;
#[derive(Component)]
pub struct ModalCloseButton;

pub fn handle_modal_requests(
    mut requests: EventReader<ModalRequest>,
    manifest: Option<Res<SceneManifest>>,
    mut state: ResMut<ModalState>,
    mut inventory: ResMut<Inventory>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for request in requests.read() {
        match request {
            ModalRequest::Open { modal_id } => {
                let Some(definition) = manifest.as_ref().and_then(|m| m.modal(modal_id)) else {
                    warn!("Modal '{}' is not defined in the scene manifest", modal_id);
                    continue;
                };

                if state.current().is_some_and(|open| open.id == *modal_id) {
                    continue;
                }

                state.open(OpenModal {
                    id: definition.id.clone(),
                    title: definition.title.clone(),
                    body: definition.body.clone(),
                });
                // Reopening must not touch the resource, or the panel rebuilds.
                if !inventory.contains(modal_id) {
                    inventory.record(&definition.id, &definition.title);
                }

                info!("Opened modal '{}'", modal_id);
                rpc_interface.send_notification(
                    "modal_opened",
                    serde_json::json!({ "id": definition.id, "title": definition.title }),
                );
            }
            ModalRequest::Close => {
                if let Some(closed) = state.close() {
                    rpc_interface.send_notification(
                        "modal_closed",
                        serde_json::json!({ "id": closed.id }),
                    );
                }
            }
        }
    }
}

pub fn close_modal_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<ModalState>,
    mut requests: EventWriter<ModalRequest>,
) {
    if state.is_open() && keyboard.just_pressed(KeyCode::Escape) {
        requests.write(ModalRequest::Close);
    }
}

// Rebuilds the modal overlay whenever the open modal changes.
pub fn sync_modal_view(
    mut commands: Commands,
    state: Res<ModalState>,
    existing: Query<Entity, With<ModalRoot>>,
) {
    if !state.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    if let Some(open) = state.current() {
        spawn_modal(&mut commands, open);
    }
}

fn spawn_modal(commands: &mut Commands, modal: &OpenModal) {
    commands
        .spawn((
            ModalRoot,
            Name::new("ModalOverlay"),
            BackgroundColor(OVERLAY_BACKGROUND),
            GlobalZIndex(10),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Name::new("ModalPanel"),
                    BackgroundColor(PANEL_BACKGROUND),
                    BorderColor(BORDER),
                    Node {
                        width: Val::Px(460.0),
                        max_width: Val::Percent(90.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|panel| {
                    panel
                        .spawn((
                            Name::new("ModalHeader"),
                            BackgroundColor(HEADER_BACKGROUND),
                            Node {
                                width: Val::Percent(100.0),
                                padding: UiRect::all(Val::Px(12.0)),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::SpaceBetween,
                                ..default()
                            },
                        ))
                        .with_children(|header| {
                            header.spawn((
                                Text::new(modal.title.clone()),
                                TextFont {
                                    font_size: 20.0,
                                    ..default()
                                },
                                TextColor(TEXT_PRIMARY),
                            ));

                            header
                                .spawn((
                                    ModalCloseButton,
                                    Name::new("ModalCloseButton"),
                                    Button,
                                    BackgroundColor(BUTTON_IDLE),
                                    BorderColor(BORDER),
                                    Node {
                                        width: Val::Px(28.0),
                                        height: Val::Px(28.0),
                                        display: Display::Flex,
                                        align_items: AlignItems::Center,
                                        justify_content: JustifyContent::Center,
                                        border: UiRect::all(Val::Px(1.0)),
                                        ..default()
                                    },
                                ))
                                .with_children(|btn| {
                                    btn.spawn((
                                        Text::new("x"),
                                        TextFont {
                                            font_size: 18.0,
                                            ..default()
                                        },
                                        TextColor(TEXT_PRIMARY),
                                    ));
                                });
                        });

                    panel
                        .spawn((
                            Name::new("ModalBody"),
                            BackgroundColor(BODY_BACKGROUND),
                            Node {
                                width: Val::Percent(100.0),
                                padding: UiRect::axes(Val::Px(16.0), Val::Px(14.0)),
                                ..default()
                            },
                        ))
                        .with_children(|body| {
                            body.spawn((
                                Text::new(modal.body.clone()),
                                TextFont {
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(TEXT_MUTED),
                            ));
                        });
                });
        });
}
