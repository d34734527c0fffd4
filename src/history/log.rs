//! Linear undo/redo log.

use super::entry::{HistoryEntry, StrokeEntry};
use super::events::HistorySnapshot;

/// Ordered, replayable sequence of entries plus the replay position.
///
/// `current_step` counts how many entries are applied to the rendered
/// surface and never exceeds `len()`. Moving it (undo/redo) never destroys
/// entries; only inserting while behind the tip drops the redo-future.
#[derive(Debug, Default)]
pub struct History {
    log: Vec<HistoryEntry>,
    current_step: usize,
    current_entry: StrokeEntry,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the tip and moves the replay position onto it.
    ///
    /// Any redo-future beyond `current_step` is discarded first.
    pub fn insert(&mut self, entry: HistoryEntry) {
        self.truncate_future();
        self.log.push(entry);
        self.current_step = self.log.len();
    }

    /// Drops entries past the replay position. Returns how many were removed.
    pub fn truncate_future(&mut self) -> usize {
        let removed = self.log.len() - self.current_step;
        self.log.truncate(self.current_step);
        removed
    }

    /// Clamps a requested step into `0..=len()`.
    pub fn clamp(&self, step: usize) -> usize {
        step.min(self.log.len())
    }

    pub(crate) fn set_current_step(&mut self, step: usize) {
        self.current_step = self.clamp(step);
    }

    /// Empties the log and rewinds to step 0.
    pub fn clear(&mut self) {
        self.log.clear();
        self.current_step = 0;
        self.current_entry = StrokeEntry::new();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.log
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.current_step > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_step < self.log.len()
    }

    /// Stroke under construction by the active gesture.
    pub fn current_entry(&self) -> &StrokeEntry {
        &self.current_entry
    }

    pub(crate) fn current_entry_mut(&mut self) -> &mut StrokeEntry {
        &mut self.current_entry
    }

    /// Takes the stroke under construction, leaving an empty buffer behind.
    pub(crate) fn take_current_entry(&mut self) -> StrokeEntry {
        std::mem::take(&mut self.current_entry)
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            entries: self.log.iter().map(HistoryEntry::summary).collect(),
            current_step: self.current_step,
            pending_segments: self.current_entry.len(),
        }
    }
}
