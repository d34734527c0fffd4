//! Input events consumed by the drawing canvas.
//!
//! Backends translate native mouse, touch, and keyboard events into these
//! types. The gesture state machine that consumes them lives on
//! [`crate::canvas::DrawCanvas`].

pub mod events;
pub mod modifiers;

// Re-export commonly used types at module level
pub use events::{EventKind, EventResponse, InputEvent, KeyEvent, TouchPoint};
pub use modifiers::Modifiers;
