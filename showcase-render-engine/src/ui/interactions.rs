use super::inventory::{CollapseButton, InventoryEntry, InventoryPanelState};
use super::modal::{ModalCloseButton, ModalRequest};
use bevy::prelude::*;
use constants::ui_palette::*;

fn feedback_colour(interaction: Interaction) -> BackgroundColor {
    BackgroundColor(match interaction {
        Interaction::Pressed => BUTTON_PRESSED,
        Interaction::Hovered => BUTTON_HOVERED,
        Interaction::None => BUTTON_IDLE,
    })
}

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<CollapseButton>)>,
    mut state: ResMut<InventoryPanelState>,
) {
    for (interaction, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            state.collapsed = !state.collapsed;
        }
        *bg = feedback_colour(*interaction);
    }
}

pub fn modal_close_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<ModalCloseButton>)>,
    mut requests: EventWriter<ModalRequest>,
) {
    for (interaction, mut bg) in &mut q {
        if *interaction == Interaction::Pressed {
            requests.write(ModalRequest::Close);
        }
        *bg = feedback_colour(*interaction);
    }
}

// Inventory entries reopen the modal they were collected from
pub fn inventory_entry_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor, &InventoryEntry), (Changed<Interaction>, With<Button>)>,
    mut requests: EventWriter<ModalRequest>,
) {
    for (interaction, mut bg, InventoryEntry(modal_id)) in &mut q {
        if *interaction == Interaction::Pressed {
            requests.write(ModalRequest::Open {
                modal_id: modal_id.clone(),
            });
        }
        *bg = feedback_colour(*interaction);
    }
}
