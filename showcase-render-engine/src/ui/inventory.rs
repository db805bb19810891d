use bevy::prelude::*;
use constants::ui_palette::*;
use serde::Serialize;

/// A modal the visitor has already opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub modal_id: String,
    pub title: String,
}

/// Modals discovered so far, in discovery order.
#[derive(Resource, Debug, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Returns `false` when the modal was already recorded.
    pub fn record(&mut self, modal_id: &str, title: &str) -> bool {
        if self.contains(modal_id) {
            return false;
        }
        self.items.push(InventoryItem {
            modal_id: modal_id.to_string(),
            title: title.to_string(),
        });
        true
    }

    pub fn contains(&self, modal_id: &str) -> bool {
        self.items.iter().any(|item| item.modal_id == modal_id)
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }
}

#[derive(Resource)]
pub struct InventoryPanelState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}

impl Default for InventoryPanelState {
    fn default() -> Self {
        Self {
            collapsed: true,
            open_width: 260.0,
            closed_width: 32.0,
        }
    }
}

/// Node sizes derived from the collapse flag, shared by spawn and update.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanelLayout {
    width: f32,
    header_padding: f32,
    header_justify: JustifyContent,
    toggle_size: f32,
    content_display: Display,
    chevron: &'static str,
}

impl PanelLayout {
    fn for_state(state: &InventoryPanelState) -> Self {
        if state.collapsed {
            Self {
                width: state.closed_width,
                header_padding: 4.0,
                header_justify: JustifyContent::FlexStart,
                toggle_size: 24.0,
                content_display: Display::None,
                chevron: ">",
            }
        } else {
            Self {
                width: state.open_width,
                header_padding: 12.0,
                header_justify: JustifyContent::SpaceBetween,
                toggle_size: 28.0,
                content_display: Display::Flex,
                chevron: "<",
            }
        }
    }
}

#[derive(Component)]
pub struct InventoryRoot;
#[derive(Component)]
pub struct InventoryHeader;
/// Title and list are hidden while the panel is collapsed.
#[derive(Component)]
pub struct HiddenWhenCollapsed;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct InventoryList;

/// Button reopening the modal it was discovered from.
#[derive(Component, Debug, Clone)]
pub struct InventoryEntry(pub String);

// Left-edge panel; starts collapsed so the scene is unobstructed.
pub fn spawn_inventory_panel(mut commands: Commands, state: Res<InventoryPanelState>) {
    let layout = PanelLayout::for_state(&state);

    commands
        .spawn((
            InventoryRoot,
            Name::new("InventoryPanel"),
            BackgroundColor(PANEL_BACKGROUND),
            Node {
                width: Val::Px(layout.width),
                max_height: Val::Percent(80.0),
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|panel| {
            panel
                .spawn((
                    InventoryHeader,
                    Name::new("InventoryHeader"),
                    BackgroundColor(HEADER_BACKGROUND),
                    Node {
                        padding: UiRect::all(Val::Px(layout.header_padding)),
                        align_items: AlignItems::Center,
                        justify_content: layout.header_justify,
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        HiddenWhenCollapsed,
                        Text::new("Inventory"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(TEXT_PRIMARY),
                        Node {
                            display: layout.content_display,
                            ..default()
                        },
                    ));

                    header
                        .spawn((
                            CollapseButton,
                            Button,
                            BackgroundColor(BUTTON_IDLE),
                            BorderColor(BORDER),
                            Node {
                                width: Val::Px(layout.toggle_size),
                                height: Val::Px(layout.toggle_size),
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_child((
                            CollapseLabel,
                            Text::new(layout.chevron),
                            TextFont {
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(TEXT_PRIMARY),
                        ));
                });

            panel.spawn((
                InventoryList,
                HiddenWhenCollapsed,
                Name::new("InventoryList"),
                BackgroundColor(BODY_BACKGROUND),
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                    row_gap: Val::Px(6.0),
                    display: layout.content_display,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::scroll_y(),
                    ..default()
                },
            ));
        });
}

pub fn apply_collapse_state(
    state: Res<InventoryPanelState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<InventoryRoot>>,
        Query<&mut Node, With<InventoryHeader>>,
        Query<&mut Node, With<CollapseButton>>,
        Query<&mut Node, With<HiddenWhenCollapsed>>,
    )>,
    mut labels: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() {
        return;
    }
    let layout = PanelLayout::for_state(&state);

    for mut node in nodes.p0().iter_mut() {
        node.width = Val::Px(layout.width);
    }
    for mut node in nodes.p1().iter_mut() {
        node.padding = UiRect::all(Val::Px(layout.header_padding));
        node.justify_content = layout.header_justify;
    }
    for mut node in nodes.p2().iter_mut() {
        node.width = Val::Px(layout.toggle_size);
        node.height = Val::Px(layout.toggle_size);
    }
    for mut node in nodes.p3().iter_mut() {
        node.display = layout.content_display;
    }
    for mut label in &mut labels {
        label.0 = layout.chevron.to_string();
    }
}

// Rebuilds the entry buttons after the inventory gains an item
pub fn rebuild_inventory_list(
    mut commands: Commands,
    inventory: Res<Inventory>,
    list: Query<Entity, With<InventoryList>>,
) {
    if !inventory.is_changed() {
        return;
    }
    let Ok(list) = list.single() else {
        return;
    };

    commands
        .entity(list)
        .despawn_related::<Children>()
        .with_children(|body| {
            if inventory.items().is_empty() {
                body.spawn((
                    Text::new("Click objects in the scene to collect them."),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(TEXT_MUTED),
                ));
                return;
            }

            for item in inventory.items() {
                body.spawn((
                    InventoryEntry(item.modal_id.clone()),
                    Button,
                    Name::new(format!("InventoryEntry({})", item.modal_id)),
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(BORDER),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(32.0),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new(item.title.clone()),
                        TextFont {
                            font_size: 15.0,
                            ..default()
                        },
                        TextColor(TEXT_PRIMARY),
                    ));
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_discovery_order_and_skips_duplicates() {
        let mut inventory = Inventory::default();
        assert!(inventory.record("globe", "Globe"));
        assert!(inventory.record("clock", "Clock"));
        assert!(!inventory.record("globe", "Globe"));

        let ids: Vec<_> = inventory.items().iter().map(|i| i.modal_id.as_str()).collect();
        assert_eq!(ids, ["globe", "clock"]);
    }

    #[test]
    fn collapsed_layout_hides_content_and_narrows_panel() {
        let mut state = InventoryPanelState::default();
        let collapsed = PanelLayout::for_state(&state);
        assert_eq!(collapsed.width, state.closed_width);
        assert_eq!(collapsed.content_display, Display::None);

        state.collapsed = false;
        let open = PanelLayout::for_state(&state);
        assert_eq!(open.width, state.open_width);
        assert_eq!(open.content_display, Display::Flex);
        assert_ne!(open.chevron, collapsed.chevron);
    }
}
