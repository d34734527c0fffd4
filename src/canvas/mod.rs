//! The drawing surface controller.
//!
//! [`DrawCanvas`] ties together the raster surface, the history log, and the
//! gesture state machine:
//! - input events drive Idle -> Drawing -> Idle and record stroke segments
//! - finished strokes are committed to the history log
//! - undo, redo, resizes, and recolors replay the log onto the surface

mod element;
mod error;
mod keyboard;
mod navigation;
mod pointer;

pub use element::{CanvasSettings, DrawCanvas, ElementId, MAX_DIMENSION, OBSERVED_ATTRIBUTES};
pub use error::CanvasError;
