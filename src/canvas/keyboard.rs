use crate::config::Action;
use crate::input::KeyEvent;

use super::{CanvasError, DrawCanvas};

impl DrawCanvas {
    /// Runs the history accelerator bound to a key press, if any.
    ///
    /// Returns the action that was triggered.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Result<Option<Action>, CanvasError> {
        let Some(action) = self.action_map.find(event) else {
            return Ok(None);
        };

        match action {
            Action::Undo => self.undo()?,
            Action::Redo => self.redo()?,
        }
        Ok(Some(action))
    }
}
