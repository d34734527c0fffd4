//! Error type shared by the canvas, its surface, and its collaborators.

use super::ElementId;
use thiserror::Error;

/// Errors raised by canvas operations.
///
/// None of these are retried or swallowed; every handler propagates them to
/// its caller.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// An event was dispatched to a canvas other than the one it targets.
    /// The handler aborts before touching any state.
    #[error("unexpected event target: expected {expected}, got {actual}")]
    UnexpectedTarget {
        expected: ElementId,
        actual: ElementId,
    },

    /// A UI element the widget needs is absent; there is no degraded mode.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("invalid value {value:?} for attribute {name}")]
    InvalidAttribute { name: String, value: String },

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
