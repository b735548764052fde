//! Pointer event vocabulary consumed by the interaction controller.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary button: creates shapes, grabs handles, toggles modes.
    #[default]
    Left,
    /// Secondary (context) button: hides the bounding box.
    Right,
    Middle,
}

/// Pointer event in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Up {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Primary-button press.
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// Primary-button release.
    pub fn up(x: f64, y: f64) -> Self {
        Self::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Secondary (context) press.
    pub fn secondary(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button: MouseButton::Right,
        }
    }

    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => {
                position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_format() {
        let json = r#"[
            {"type": "down", "position": {"x": 100.0, "y": 100.0}},
            {"type": "move", "position": {"x": 150.0, "y": 130.0}},
            {"type": "down", "position": {"x": 10.0, "y": 10.0}, "button": "right"}
        ]"#;
        let events: Vec<PointerEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0], PointerEvent::down(100.0, 100.0));
        assert_eq!(events[1], PointerEvent::moved(150.0, 130.0));
        assert_eq!(events[2], PointerEvent::secondary(10.0, 10.0));
    }

    #[test]
    fn test_position() {
        assert_eq!(PointerEvent::up(3.0, 4.0).position(), Point::new(3.0, 4.0));
    }
}
