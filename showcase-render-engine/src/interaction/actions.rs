use super::navigation::NavigationRequest;
use super::state::{InteractionHandlers, PointerEventKind, PointerInteraction, ScaleDescriptor, ShowcaseObject};
use crate::rpc::web_rpc::WebRpcInterface;
use crate::ui::modal::ModalRequest;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleLevel {
    Base,
    Hover,
    Click,
}

/// Declarative callback run when a pointer transition hits an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InteractionAction {
    ScaleTo { level: ScaleLevel },
    OpenModal { modal: String },
    Navigate { url: String },
}

impl InteractionAction {
    pub fn default_hover_enter() -> Vec<Self> {
        vec![Self::ScaleTo {
            level: ScaleLevel::Hover,
        }]
    }

    pub fn default_hover_exit() -> Vec<Self> {
        vec![Self::ScaleTo {
            level: ScaleLevel::Base,
        }]
    }

    pub fn default_click() -> Vec<Self> {
        vec![Self::ScaleTo {
            level: ScaleLevel::Click,
        }]
    }
}

/// Runs the handler list of every pointer transition emitted this frame.
pub fn dispatch_interactions(
    mut events: EventReader<PointerInteraction>,
    mut objects: Query<(&ShowcaseObject, &InteractionHandlers, Option<&mut ScaleDescriptor>)>,
    mut modal_requests: EventWriter<ModalRequest>,
    mut navigation: EventWriter<NavigationRequest>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        // Entity may have been despawned between detection and dispatch.
        let Ok((object, handlers, mut scale)) = objects.get_mut(event.entity) else {
            continue;
        };

        if event.kind == PointerEventKind::Click {
            info!("Clicked showcase object '{}'", object.name);
            rpc_interface.send_notification(
                "object_clicked",
                serde_json::json!({ "name": object.name }),
            );
        }

        for action in handlers.actions_for(event.kind) {
            match action {
                InteractionAction::ScaleTo { level } => {
                    if let Some(scale) = scale.as_deref_mut() {
                        scale.set_target(*level);
                    }
                }
                InteractionAction::OpenModal { modal } => {
                    modal_requests.write(ModalRequest::Open {
                        modal_id: modal.clone(),
                    });
                }
                InteractionAction::Navigate { url } => {
                    navigation.write(NavigationRequest { url: url.clone() });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_app() -> App {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .add_event::<PointerInteraction>()
            .add_event::<ModalRequest>()
            .add_event::<NavigationRequest>()
            .add_systems(Update, dispatch_interactions);
        app
    }

    fn spawn_object(app: &mut App, on_click: Vec<InteractionAction>) -> Entity {
        app.world_mut()
            .spawn((
                ShowcaseObject {
                    name: "lamp".into(),
                },
                ScaleDescriptor::new(1.0, 1.1, 1.4),
                InteractionHandlers {
                    on_hover_enter: Some(InteractionAction::default_hover_enter()),
                    on_hover_exit: Some(InteractionAction::default_hover_exit()),
                    on_click: Some(on_click),
                },
            ))
            .id()
    }

    fn send(app: &mut App, entity: Entity, kind: PointerEventKind) {
        app.world_mut()
            .send_event(PointerInteraction { entity, kind });
        app.update();
    }

    #[test]
    fn hover_enter_and_exit_move_the_target_scale() {
        let mut app = dispatch_app();
        let entity = spawn_object(&mut app, InteractionAction::default_click());

        send(&mut app, entity, PointerEventKind::HoverEnter);
        let scale = app.world().get::<ScaleDescriptor>(entity).unwrap();
        assert_eq!(scale.target_scale, 1.1);

        send(&mut app, entity, PointerEventKind::HoverExit);
        let scale = app.world().get::<ScaleDescriptor>(entity).unwrap();
        assert_eq!(scale.target_scale, 1.0);
    }

    #[test]
    fn click_runs_every_action_in_order() {
        let mut app = dispatch_app();
        let entity = spawn_object(
            &mut app,
            vec![
                InteractionAction::ScaleTo {
                    level: ScaleLevel::Click,
                },
                InteractionAction::OpenModal {
                    modal: "lamp-info".into(),
                },
                InteractionAction::Navigate {
                    url: "https://example.com/exit".into(),
                },
            ],
        );

        send(&mut app, entity, PointerEventKind::Click);

        let scale = app.world().get::<ScaleDescriptor>(entity).unwrap();
        assert_eq!(scale.target_scale, 1.4);

        let modal_events = app.world().resource::<Events<ModalRequest>>();
        let requests: Vec<_> = modal_events.get_cursor().read(modal_events).cloned().collect();
        assert_eq!(
            requests,
            vec![ModalRequest::Open {
                modal_id: "lamp-info".into()
            }]
        );

        let nav_events = app.world().resource::<Events<NavigationRequest>>();
        let urls: Vec<_> = nav_events
            .get_cursor()
            .read(nav_events)
            .map(|request| request.url.clone())
            .collect();
        assert_eq!(urls, vec!["https://example.com/exit".to_string()]);
    }

    #[test]
    fn events_for_despawned_entities_are_ignored() {
        let mut app = dispatch_app();
        let entity = spawn_object(&mut app, InteractionAction::default_click());
        app.world_mut().despawn(entity);

        send(&mut app, entity, PointerEventKind::Click);
        assert!(app.world().get_entity(entity).is_err());
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let json = r#"[
            { "action": "scale_to", "level": "hover" },
            { "action": "open_modal", "modal": "about" },
            { "action": "navigate", "url": "https://example.com" }
        ]"#;
        let actions: Vec<InteractionAction> = serde_json::from_str(json).unwrap();
        assert_eq!(
            actions,
            vec![
                InteractionAction::ScaleTo {
                    level: ScaleLevel::Hover
                },
                InteractionAction::OpenModal {
                    modal: "about".into()
                },
                InteractionAction::Navigate {
                    url: "https://example.com".into()
                },
            ]
        );
    }
}
