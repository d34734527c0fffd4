//! Host-agnostic input event types.
//!
//! Hosts translate their native pointer, touch, and keyboard events into
//! these values and dispatch them to the canvas they were delivered to.

use super::modifiers::Modifiers;
use crate::canvas::ElementId;
use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// A single active touch contact, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub page_x: f64,
    pub page_y: f64,
}

impl TouchPoint {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }

    pub fn page_position(&self) -> Point {
        Point::new(self.page_x, self.page_y)
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name as reported by the host ("z", "Z", "Escape", ...)
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Input delivered to a canvas.
///
/// Mouse coordinates are element-local. Touch lists hold every contact
/// still on the surface when the event fired, in page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp { x: f64, y: f64 },
    MouseLeave { x: f64, y: f64 },
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd { touches: Vec<TouchPoint> },
    TouchCancel { touches: Vec<TouchPoint> },
    KeyDown(KeyEvent),
}

impl EventKind {
    /// True for the four touch event kinds.
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            EventKind::TouchStart { .. }
                | EventKind::TouchMove { .. }
                | EventKind::TouchEnd { .. }
                | EventKind::TouchCancel { .. }
        )
    }
}

/// An event together with the element it was dispatched to.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    pub target: ElementId,
    pub kind: EventKind,
}

impl InputEvent {
    pub fn new(target: ElementId, kind: EventKind) -> Self {
        Self { target, kind }
    }
}

/// What the host should do with its own default handling of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Let the platform run its default behavior
    Default,
    /// Suppress the platform default (scrolling, zooming, ...)
    PreventDefault,
}
