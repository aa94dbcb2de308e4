//! Touch-control model.
//!
//! Gesture recognition lives in the platform layer; this is only the state
//! it publishes, which the renderer can overlay for debugging.

use serde::{Deserialize, Serialize};

use crate::core::{Circle, Vec2};

/// What a touch object does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchObjectKind {
    /// Analog stick; its thumb follows `touch_position`.
    Joystick,
    /// Plain tap area.
    Button,
}

/// One on-screen control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchObject {
    pub kind: TouchObjectKind,
    /// Region that reacts to touches.
    pub touch_area: Circle,
    /// Current finger position (joystick thumb position).
    pub touch_position: Vec2,
}

impl TouchObject {
    /// A joystick resting at the centre of its area.
    #[must_use]
    pub fn joystick(area: Circle) -> Self {
        Self {
            kind: TouchObjectKind::Joystick,
            touch_area: area,
            touch_position: area.center,
        }
    }

    /// A button.
    #[must_use]
    pub fn button(area: Circle) -> Self {
        Self {
            kind: TouchObjectKind::Button,
            touch_area: area,
            touch_position: area.center,
        }
    }
}

/// All touch controls, in overlay draw order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchModel {
    pub objects: Vec<TouchObject>,
}

impl TouchModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control (builder pattern).
    #[must_use]
    pub fn with_object(mut self, object: TouchObject) -> Self {
        self.objects.push(object);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joystick_rests_at_center() {
        let area = Circle::new(Vec2::new(100.0, 1100.0), 80.0);
        let stick = TouchObject::joystick(area);
        assert_eq!(stick.kind, TouchObjectKind::Joystick);
        assert_eq!(stick.touch_position, area.center);

        let model = TouchModel::new().with_object(stick).with_object(TouchObject::button(area));
        assert_eq!(model.objects.len(), 2);
    }
}
