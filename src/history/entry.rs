//! History log entries: committed strokes and external steps.

use crate::canvas::CanvasError;
use crate::draw::{Segment, render};
use std::fmt;
use std::rc::Rc;

/// What an entry may paint onto during replay.
///
/// Exposes the logical canvas size and the drawing context, nothing else;
/// replayed entries cannot reach the history they belong to.
pub struct StepTarget<'a> {
    ctx: &'a cairo::Context,
    width: u32,
    height: u32,
}

impl<'a> StepTarget<'a> {
    pub fn new(ctx: &'a cairo::Context, width: u32, height: u32) -> Self {
        Self { ctx, width, height }
    }

    /// Drawing context of the canvas surface.
    pub fn context(&self) -> &cairo::Context {
        self.ctx
    }

    /// Logical canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Segments produced by one continuous pointer-down-to-pointer-up gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeEntry {
    segments: Vec<Segment>,
}

impl StrokeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Segment>> for StrokeEntry {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

type StepFn = dyn Fn(&StepTarget<'_>) -> Result<(), CanvasError>;

/// Opaque replayable operation supplied from outside the canvas, such as
/// "draw this bitmap at the canvas size".
///
/// The closure is called again on every replay that covers the entry, so it
/// must paint the same result each time and only through the target it is
/// given.
#[derive(Clone)]
pub struct ExternalStep {
    label: String,
    apply: Rc<StepFn>,
}

impl ExternalStep {
    pub fn new<F>(label: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&StepTarget<'_>) -> Result<(), CanvasError> + 'static,
    {
        Self {
            label: label.into(),
            apply: Rc::new(apply),
        }
    }

    /// Short description used in logs and history snapshots.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn apply(&self, target: &StepTarget<'_>) -> Result<(), CanvasError> {
        (self.apply)(target)
    }
}

impl fmt::Debug for ExternalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalStep")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One entry of the history log.
#[derive(Clone, Debug)]
pub enum HistoryEntry {
    /// Freehand stroke recorded from pointer input
    Stroke(StrokeEntry),
    /// Operation spliced in by an outside actor (e.g. image import)
    External(ExternalStep),
}

impl HistoryEntry {
    /// Paints this entry onto the target.
    pub fn replay(&self, target: &StepTarget<'_>) -> Result<(), CanvasError> {
        match self {
            HistoryEntry::Stroke(stroke) => {
                render::render_segments(target.context(), stroke.segments())?;
                Ok(())
            }
            HistoryEntry::External(step) => step.apply(target),
        }
    }

    pub fn summary(&self) -> EntrySummary {
        match self {
            HistoryEntry::Stroke(stroke) => EntrySummary::Stroke {
                segments: stroke.len(),
            },
            HistoryEntry::External(step) => EntrySummary::External {
                label: step.label().to_string(),
            },
        }
    }
}

impl From<StrokeEntry> for HistoryEntry {
    fn from(stroke: StrokeEntry) -> Self {
        HistoryEntry::Stroke(stroke)
    }
}

impl From<ExternalStep> for HistoryEntry {
    fn from(step: ExternalStep) -> Self {
        HistoryEntry::External(step)
    }
}

/// Cloneable description of a log entry carried in notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntrySummary {
    Stroke { segments: usize },
    External { label: String },
}
