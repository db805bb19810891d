//! Pointer-driven interaction with showcase objects.
//!
//! ## Object Interaction
//!
//! - Hovering an object raises its target scale to the hover factor
//! - Leaving it eases back to the base factor
//! - Clicking runs its click handlers (scale, open modal, navigate)
//! - While a modal is open or a UI button is hovered the world ignores the pointer
//!
//! ## Event Flow
//!
//! ```text
//! update_pointer (cursor ray vs PickBounds)
//!   └─> PointerInteraction { entity, kind }
//!         └─> dispatch_interactions (InteractionHandlers)
//!               ├─> ScaleDescriptor::target_scale
//!               ├─> ModalRequest::Open
//!               └─> NavigationRequest ─> perform_navigation
//! ```
//!
//! ## Raycasting
//!
//! Picking uses oriented bounding box intersection:
//! - Camera ray transformed into object-local space
//! - AABB slab method tests against half-extents
//! - Closest hit in front of the camera wins

/// Action definitions and the dispatcher that runs them.
pub mod actions;

/// Page navigation for objects that leave the showcase.
pub mod navigation;

/// Cursor ray casting and hover/click transition detection.
pub mod pointer;

/// Ray intersection utilities for oriented bounding box picking.
pub mod ray;

/// Components and resources describing interactive objects.
pub mod state;

use bevy::prelude::*;

use actions::dispatch_interactions;
use navigation::{NavigationRequest, perform_navigation};
use pointer::update_pointer;
use state::{HoverState, PointerInteraction};

use crate::engine::core::app_state::AppState;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .add_event::<PointerInteraction>()
            .add_event::<NavigationRequest>()
            .add_systems(
                Update,
                (update_pointer, dispatch_interactions, perform_navigation)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
