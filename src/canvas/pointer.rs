use crate::draw::{Point, Segment, render};
use crate::history::HistoryEntry;
use crate::input::{EventKind, EventResponse, InputEvent, TouchPoint};
use log::debug;

use super::{CanvasError, DrawCanvas};

impl DrawCanvas {
    /// Dispatches one input event to the gesture state machine.
    ///
    /// # Errors
    /// [`CanvasError::UnexpectedTarget`] when the event was addressed to a
    /// different canvas; no state is touched in that case.
    ///
    /// # Behavior
    /// - Mouse down / single-touch start: enter the Drawing state
    /// - Move while Drawing: record and paint one segment
    /// - Up, leave, touch end/cancel: commit the stroke and return to Idle
    /// - Key down: undo/redo accelerators
    ///
    /// Touch events ask the host to suppress its default gesture handling,
    /// except multi-touch moves, which are left to the platform.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<EventResponse, CanvasError> {
        self.check_target(event.target)?;

        match &event.kind {
            EventKind::MouseDown { .. } => self.start_drawing(),
            EventKind::TouchStart { touches } => {
                if touches.len() == 1 {
                    self.start_drawing();
                }
            }
            EventKind::MouseMove { x, y } => self.draw_to(Point::new(*x, *y))?,
            EventKind::TouchMove { touches } => {
                if let [touch] = touches.as_slice() {
                    let position = self.touch_position(touch);
                    self.draw_to(position)?;
                }
            }
            EventKind::MouseUp { x, y } | EventKind::MouseLeave { x, y } => {
                self.stop_drawing(Some(Point::new(*x, *y)))?;
            }
            // The touch list of an end/cancel event no longer holds the
            // lifted finger; its last position came with the final move.
            EventKind::TouchEnd { .. } | EventKind::TouchCancel { .. } => self.stop_drawing(None)?,
            EventKind::KeyDown(key) => {
                self.handle_key(key)?;
            }
        }

        Ok(match &event.kind {
            EventKind::TouchMove { touches } if touches.len() != 1 => EventResponse::Default,
            kind if kind.is_touch() => EventResponse::PreventDefault,
            _ => EventResponse::Default,
        })
    }

    fn touch_position(&self, touch: &TouchPoint) -> Point {
        touch.page_position().relative_to(self.state.page_offset)
    }

    /// Idle -> Drawing.
    pub(crate) fn start_drawing(&mut self) {
        self.state.drawing = true;
    }

    /// Records and paints a segment from the last position to `position`.
    ///
    /// No-op while Idle. The first segment of a gesture starts and ends at
    /// `position`, leaving a dot.
    pub(crate) fn draw_to(&mut self, position: Point) -> Result<(), CanvasError> {
        if !self.state.drawing {
            return Ok(());
        }

        let from = self.state.last_position.unwrap_or(position);
        let segment = Segment::new(from, position, self.state.color, self.state.size);
        self.history.current_entry_mut().push(segment);
        render::render_segment(self.surface.context(), &segment)?;
        self.state.last_position = Some(position);
        Ok(())
    }

    /// Drawing -> Idle.
    ///
    /// When the gesture already moved, `final_position` is flushed as one
    /// last segment first. A gesture that never moved records nothing and
    /// commits nothing.
    pub(crate) fn stop_drawing(&mut self, final_position: Option<Point>) -> Result<(), CanvasError> {
        if let Some(position) = final_position {
            if self.state.last_position.is_some() {
                self.draw_to(position)?;
            }
        }

        if !self.history.current_entry().is_empty() {
            let stroke = self.history.take_current_entry();
            debug!("{} committing stroke of {} segments", self.id, stroke.len());
            self.insert_step(HistoryEntry::Stroke(stroke));
        }

        self.state.drawing = false;
        self.state.last_position = None;
        Ok(())
    }
}
