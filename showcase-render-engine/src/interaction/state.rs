use super::actions::{InteractionAction, ScaleLevel};
use bevy::prelude::*;

/// Identity of a showcase model in the scene graph.
#[derive(Component, Debug, Clone)]
pub struct ShowcaseObject {
    pub name: String,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Interactable {
    pub enabled: bool,
}

/// Base/hover/click scale factors and the scale the object is currently easing toward.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ScaleDescriptor {
    pub base: f32,
    pub hover: f32,
    pub click: f32,
    pub target_scale: f32,
}

impl ScaleDescriptor {
    pub fn new(base: f32, hover: f32, click: f32) -> Self {
        Self {
            base,
            hover,
            click,
            target_scale: base,
        }
    }

    pub fn factor(&self, level: ScaleLevel) -> f32 {
        match level {
            ScaleLevel::Base => self.base,
            ScaleLevel::Hover => self.hover,
            ScaleLevel::Click => self.click,
        }
    }

    pub fn set_target(&mut self, level: ScaleLevel) {
        self.target_scale = self.factor(level);
    }
}

/// Constant spin around a normalized axis, in radians per frame.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RotationDescriptor {
    axis: Vec3,
    speed: f32,
}

impl RotationDescriptor {
    /// Returns `None` when the axis cannot be normalized.
    pub fn new(axis: Vec3, speed: f32) -> Option<Self> {
        let axis = axis.try_normalize()?;
        Some(Self { axis, speed })
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

/// Kind of pointer transition reported by the pointer helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    HoverEnter,
    HoverExit,
    Click,
}

/// Optional action lists run for each pointer transition.
#[derive(Component, Debug, Clone, Default)]
pub struct InteractionHandlers {
    pub on_hover_enter: Option<Vec<InteractionAction>>,
    pub on_hover_exit: Option<Vec<InteractionAction>>,
    pub on_click: Option<Vec<InteractionAction>>,
}

impl InteractionHandlers {
    pub fn actions_for(&self, kind: PointerEventKind) -> &[InteractionAction] {
        let handler = match kind {
            PointerEventKind::HoverEnter => &self.on_hover_enter,
            PointerEventKind::HoverExit => &self.on_hover_exit,
            PointerEventKind::Click => &self.on_click,
        };
        handler.as_deref().unwrap_or(&[])
    }
}

/// Local-space box tested by the pointer ray. Scales with the entity transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickBounds(pub Vec3);

#[derive(Resource, Debug, Default)]
pub struct HoverState {
    pub hovered: Option<Entity>,
}

/// Pointer transition for one entity, consumed by the action dispatcher.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInteraction {
    pub entity: Entity,
    pub kind: PointerEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_descriptor_starts_at_base_and_switches_levels() {
        let mut scale = ScaleDescriptor::new(1.0, 1.2, 1.5);
        assert_eq!(scale.target_scale, 1.0);

        scale.set_target(ScaleLevel::Click);
        assert_eq!(scale.target_scale, 1.5);

        scale.set_target(ScaleLevel::Hover);
        assert_eq!(scale.target_scale, 1.2);
    }

    #[test]
    fn rotation_axis_is_normalized_and_zero_axis_rejected() {
        let rotation = RotationDescriptor::new(Vec3::new(0.0, 3.0, 0.0), 0.02).unwrap();
        assert!((rotation.axis().length() - 1.0).abs() < 1e-6);
        assert_eq!(rotation.speed(), 0.02);

        assert!(RotationDescriptor::new(Vec3::ZERO, 0.02).is_none());
    }

    #[test]
    fn missing_handler_yields_no_actions() {
        let handlers = InteractionHandlers {
            on_click: Some(vec![InteractionAction::Navigate {
                url: "https://example.com".into(),
            }]),
            ..default()
        };
        assert!(handlers.actions_for(PointerEventKind::HoverEnter).is_empty());
        assert_eq!(handlers.actions_for(PointerEventKind::Click).len(), 1);
    }
}
