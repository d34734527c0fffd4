use crate::draw::render;
use crate::history::{HistoryEntry, HistoryEvent, StepTarget};
use log::debug;

use super::{CanvasError, DrawCanvas};

/// Where a redraw should bring the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RedrawTarget {
    /// An explicitly requested history step (clamped into range)
    Step(usize),
    /// Rebuild the current step from scratch after a resize or recolor
    Current,
}

impl DrawCanvas {
    /// Appends an entry at the tip of the history and emits
    /// [`HistoryEvent::Changed`].
    ///
    /// Entries past the current step (the redo-future) are dropped first.
    /// The entry is assumed to be on the surface already: strokes are
    /// painted while they are drawn. Use [`DrawCanvas::push_step`] to paint
    /// and insert in one go.
    pub fn insert_step(&mut self, entry: impl Into<HistoryEntry>) {
        let dropped = self.history.truncate_future();
        if dropped > 0 {
            debug!("{} discarded {} redo entries", self.id, dropped);
        }
        self.history.insert(entry.into());
        self.emit(HistoryEvent::Changed(self.history.snapshot()));
    }

    /// Paints an entry onto the current surface, then inserts it.
    pub fn push_step(&mut self, entry: impl Into<HistoryEntry>) -> Result<(), CanvasError> {
        let entry = entry.into();
        let target = StepTarget::new(self.surface.context(), self.state.width, self.state.height);
        entry.replay(&target)?;
        self.insert_step(entry);
        Ok(())
    }

    /// Steps back one entry. No-op at step 0.
    pub fn undo(&mut self) -> Result<(), CanvasError> {
        let target = self.history.current_step().saturating_sub(1);
        self.redraw(RedrawTarget::Step(target))
    }

    /// Steps forward one entry. No-op at the tip.
    pub fn redo(&mut self) -> Result<(), CanvasError> {
        let target = self.history.current_step() + 1;
        self.redraw(RedrawTarget::Step(target))
    }

    /// Brings the surface to the state after `step` entries (clamped to
    /// the log length).
    pub fn go_to_step(&mut self, step: usize) -> Result<(), CanvasError> {
        self.redraw(RedrawTarget::Step(step))
    }

    pub(crate) fn redraw_current(&mut self) -> Result<(), CanvasError> {
        self.redraw(RedrawTarget::Current)
    }

    /// Replays the history so the surface shows `log[..destination]`.
    ///
    /// Moving forward to an explicit step only paints the newly included
    /// entries on top of the current pixels. Moving backward, and every
    /// resize or recolor, clears the surface and replays from entry 0.
    ///
    /// A stroke still being drawn is painted again on top of the replay, so
    /// the surface matches a rebuild once it is committed.
    pub(crate) fn redraw(&mut self, target: RedrawTarget) -> Result<(), CanvasError> {
        let previous = self.history.current_step();
        let pending = !self.history.current_entry().is_empty();
        let (destination, incremental) = match target {
            RedrawTarget::Step(step) => {
                let destination = self.history.clamp(step);
                (destination, destination == previous || (destination > previous && !pending))
            }
            RedrawTarget::Current => (previous, false),
        };

        let start = if incremental {
            previous
        } else {
            self.clear()?;
            0
        };
        debug!(
            "{} replaying entries {}..{} ({})",
            self.id,
            start,
            destination,
            if incremental { "incremental" } else { "full" }
        );

        let step_target =
            StepTarget::new(self.surface.context(), self.state.width, self.state.height);
        for entry in &self.history.entries()[start..destination] {
            entry.replay(&step_target)?;
        }
        if !incremental {
            render::render_segments(self.surface.context(), self.history.current_entry().segments())?;
        }

        if destination != previous {
            self.history.set_current_step(destination);
            self.emit(HistoryEvent::Step(self.history.snapshot()));
        }
        Ok(())
    }
}
