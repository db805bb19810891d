use super::ray::closest_hit;
use super::state::{HoverState, Interactable, PickBounds, PointerEventKind, PointerInteraction};
use crate::ui::modal::ModalState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Exit and enter transitions implied by the hovered entity changing.
pub fn hover_transitions(
    previous: Option<Entity>,
    current: Option<Entity>,
) -> (Option<Entity>, Option<Entity>) {
    if previous == current {
        return (None, None);
    }
    (previous, current)
}

// Casts the cursor ray every frame and reports hover/click transitions.
pub fn update_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    objects: Query<(Entity, &GlobalTransform, &PickBounds, &Interactable)>,
    ui_interactions: Query<&Interaction>,
    modal: Res<ModalState>,
    mut hover: ResMut<HoverState>,
    mut events: EventWriter<PointerInteraction>,
) {
    // Open panels and hovered buttons own the pointer.
    let blocked = modal.is_open() || ui_interactions.iter().any(|i| *i != Interaction::None);

    let hit = if blocked {
        None
    } else {
        pick_under_cursor(&windows, &cameras, &objects)
    };

    let (exited, entered) = hover_transitions(hover.hovered, hit);
    if let Some(entity) = exited {
        events.write(PointerInteraction {
            entity,
            kind: PointerEventKind::HoverExit,
        });
    }
    if let Some(entity) = entered {
        events.write(PointerInteraction {
            entity,
            kind: PointerEventKind::HoverEnter,
        });
    }
    hover.hovered = hit;

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(entity) = hit {
            events.write(PointerInteraction {
                entity,
                kind: PointerEventKind::Click,
            });
        }
    }
}

fn pick_under_cursor(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    objects: &Query<(Entity, &GlobalTransform, &PickBounds, &Interactable)>,
) -> Option<Entity> {
    let window = windows.single().ok()?;
    let cursor_pos = window.cursor_position()?;
    let (cam_xf, camera) = cameras.single().ok()?;
    let ray = camera.viewport_to_world(cam_xf, cursor_pos).ok()?;

    closest_hit(
        ray.origin,
        ray.direction.as_vec3(),
        objects
            .iter()
            .filter(|(_, _, _, interactable)| interactable.enabled)
            .map(|(entity, xf, PickBounds(size), _)| (entity, xf, *size)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::OpenModal;

    fn pointer_app(hovered: Entity) -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ModalState>()
            .insert_resource(HoverState {
                hovered: Some(hovered),
            })
            .add_event::<PointerInteraction>()
            .add_systems(Update, update_pointer);
        app
    }

    fn emitted(app: &App) -> Vec<PointerInteraction> {
        let events = app.world().resource::<Events<PointerInteraction>>();
        events.get_cursor().read(events).copied().collect()
    }

    fn press_left(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
    }

    #[test]
    fn moving_between_objects_exits_then_enters() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        assert_eq!(hover_transitions(None, Some(a)), (None, Some(a)));
        assert_eq!(hover_transitions(Some(a), Some(a)), (None, None));
        assert_eq!(hover_transitions(Some(a), Some(b)), (Some(a), Some(b)));
        assert_eq!(hover_transitions(Some(b), None), (Some(b), None));
    }

    #[test]
    fn open_modal_ends_hover_and_swallows_click() {
        let mut world = World::new();
        let lamp = world.spawn_empty().id();
        let mut app = pointer_app(lamp);
        app.world_mut().resource_mut::<ModalState>().open(OpenModal {
            id: "lamp".into(),
            title: "Lamp".into(),
            body: "Brass desk lamp.".into(),
        });
        press_left(&mut app);
        app.update();

        assert_eq!(
            emitted(&app),
            vec![PointerInteraction {
                entity: lamp,
                kind: PointerEventKind::HoverExit,
            }]
        );
        assert_eq!(app.world().resource::<HoverState>().hovered, None);
    }

    #[test]
    fn hovered_button_blocks_world_picking() {
        let mut world = World::new();
        let lamp = world.spawn_empty().id();
        let mut app = pointer_app(lamp);
        app.world_mut().spawn(Interaction::Hovered);
        press_left(&mut app);
        app.update();

        let kinds: Vec<_> = emitted(&app).iter().map(|event| event.kind).collect();
        assert_eq!(kinds, vec![PointerEventKind::HoverExit]);
        assert_eq!(app.world().resource::<HoverState>().hovered, None);
    }
}
