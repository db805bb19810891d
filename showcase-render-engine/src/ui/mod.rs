//! On-screen panels layered over the 3D scene.
//!
//! The modal shows the informational text attached to a clicked object; the
//! inventory lists every modal opened so far and can reopen them.

/// Button feedback and click handling for panel controls.
pub mod interactions;

/// Collapsible inventory panel and its backing resource.
pub mod inventory;

/// Informational modal overlay, its state and requests.
pub mod modal;

use bevy::prelude::*;

use interactions::{
    collapse_button_interaction, inventory_entry_interaction, modal_close_button_interaction,
};
use inventory::{
    Inventory, InventoryPanelState, apply_collapse_state, rebuild_inventory_list,
    spawn_inventory_panel,
};
use modal::{ModalRequest, ModalState, close_modal_on_escape, handle_modal_requests, sync_modal_view};

pub struct ShowcaseUiPlugin;

impl Plugin for ShowcaseUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModalState>()
            .init_resource::<Inventory>()
            .init_resource::<InventoryPanelState>()
            .add_event::<ModalRequest>()
            .add_systems(Startup, spawn_inventory_panel)
            .add_systems(
                Update,
                (
                    // Panel controls
                    collapse_button_interaction,
                    modal_close_button_interaction,
                    inventory_entry_interaction,
                    close_modal_on_escape,
                    // State then view
                    handle_modal_requests,
                    sync_modal_view,
                    apply_collapse_state,
                    rebuild_inventory_list,
                )
                    .chain(),
            );
    }
}
