//! Freehand drawing canvas with replayable undo/redo history.
//!
//! [`DrawCanvas`] records pointer and touch strokes onto a Cairo surface and
//! keeps every committed stroke (or externally supplied step, such as an
//! imported image) in a history log that is replayed for undo, redo,
//! resizes, and background changes. [`panel::DrawPanel`] wraps a canvas with
//! the controls of a comment-form drawing panel and exports the result as
//! PNG.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod import;
pub mod input;
pub mod panel;
pub mod script;
pub mod util;

pub use canvas::{CanvasError, CanvasSettings, DrawCanvas};
pub use config::Config;
