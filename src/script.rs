//! Scripted drawing sessions.
//!
//! A session is a JSON document listing what a user did with an open
//! panel, in order:
//!
//! ```json
//! {
//!   "form_width": 320,
//!   "page_offset": { "x": 10, "y": 40 },
//!   "steps": [
//!     { "event": "mouse_down", "x": 5, "y": 5 },
//!     { "event": "mouse_move", "x": 50, "y": 20 },
//!     { "event": "mouse_up", "x": 50, "y": 20 },
//!     { "action": "set_color", "value": "#ff0000" },
//!     { "event": "key_down", "key": "z", "modifiers": { "ctrl": true } },
//!     { "action": "upload" }
//!   ]
//! }
//! ```

use crate::canvas::CanvasError;
use crate::draw::Point;
use crate::input::EventKind;
use crate::panel::{CommentForm, DrawPanel, PanelAction, PanelState};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Width reported by the virtual comment form when the script gives none.
pub const DEFAULT_FORM_WIDTH: u32 = 640;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionStep {
    Event(EventKind),
    Action(PanelAction),
}

/// A recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default = "default_form_width")]
    pub form_width: u32,
    /// Page position of the canvas, subtracted from touch coordinates
    #[serde(default)]
    pub page_offset: Option<Point>,
    pub steps: Vec<SessionStep>,
}

fn default_form_width() -> u32 {
    DEFAULT_FORM_WIDTH
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse session script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session script {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Replays every step against `panel`.
    ///
    /// Stops after the step that closes the panel. Returns how many steps
    /// were applied.
    pub fn play<F: CommentForm>(&self, panel: &mut DrawPanel<F>) -> Result<usize, CanvasError> {
        if let Some(offset) = self.page_offset {
            panel.canvas_mut().set_page_offset(offset);
        }

        let mut applied = 0;
        for step in &self.steps {
            let state = match step {
                SessionStep::Event(kind) => {
                    panel.dispatch(kind.clone())?;
                    panel.state()
                }
                SessionStep::Action(action) => panel.apply(action)?,
            };
            applied += 1;
            if state == PanelState::Closed {
                break;
            }
        }
        log::debug!("Replayed {} of {} session steps", applied, self.steps.len());
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::{KeyEvent, Modifiers};

    struct NullForm;

    impl CommentForm for NullForm {
        fn width(&self) -> Option<u32> {
            Some(100)
        }

        fn set_hidden(&mut self, _hidden: bool) {}

        fn attach(&mut self, _filename: &str, _png: &[u8]) -> Result<(), CanvasError> {
            Ok(())
        }
    }

    const SCRIPT: &str = r##"{
        "page_offset": { "x": 10, "y": 20 },
        "steps": [
            { "event": "touch_start", "touches": [{ "page_x": 15, "page_y": 25 }] },
            { "event": "touch_move", "touches": [{ "page_x": 30, "page_y": 25 }] },
            { "event": "touch_end", "touches": [] },
            { "action": "set_color", "value": "#ff0000" },
            { "event": "key_down", "key": "z", "modifiers": { "ctrl": true } },
            { "action": "cancel" },
            { "action": "redo" }
        ]
    }"##;

    #[test]
    fn parses_events_and_actions() {
        let session = Session::from_json(SCRIPT).unwrap();
        assert_eq!(session.form_width, DEFAULT_FORM_WIDTH);
        assert_eq!(session.page_offset, Some(Point::new(10.0, 20.0)));
        assert_eq!(session.steps.len(), 7);
        assert_eq!(
            session.steps[4],
            SessionStep::Event(EventKind::KeyDown(KeyEvent::new("z", Modifiers::ctrl())))
        );
        assert_eq!(
            session.steps[5],
            SessionStep::Action(PanelAction::Cancel)
        );
    }

    #[test]
    fn play_stops_when_panel_closes() {
        let session = Session::from_json(SCRIPT).unwrap();
        let mut panel = DrawPanel::open(NullForm, &Config::default()).unwrap();

        let applied = session.play(&mut panel).unwrap();

        assert_eq!(applied, 6);
        assert!(!panel.is_open());
        let history = panel.canvas().history();
        assert_eq!(history.len(), 1);
        // Undone by the ctrl+z step; the trailing redo was never applied
        assert_eq!(history.current_step(), 0);
        assert_eq!(panel.canvas().page_offset(), Point::new(10.0, 20.0));
    }

    #[test]
    fn unknown_steps_are_rejected() {
        let err = Session::from_json(r#"{ "steps": [{ "action": "explode" }] }"#).unwrap_err();
        assert!(err.to_string().contains("session script"));
    }
}
