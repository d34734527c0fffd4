//! Replayable drawing history.
//!
//! The log holds committed strokes and externally supplied steps side by
//! side; a canvas replays a prefix of it to rebuild its surface. Undo and
//! redo only move the replay position.

pub mod entry;
pub mod events;
pub mod log;
#[cfg(test)]
mod tests;

pub use entry::{EntrySummary, ExternalStep, HistoryEntry, StepTarget, StrokeEntry};
pub use events::{HistoryEvent, HistorySnapshot, ListenerId, Listeners};
pub use log::History;
