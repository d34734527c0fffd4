//! Keybinding configuration types and parsing.
//!
//! The canvas only binds history navigation; the accelerators are
//! configurable so hosts can match the platform conventions of their editor.

use crate::input::{KeyEvent, Modifiers};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Undo,
    Redo,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Meta+Z".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// "Cmd", "Command", and "Super" are accepted as aliases for Meta.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        // Normalize by removing spaces around '+'
        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let mut key_parts = Vec::new();

        for part in s_normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                "meta" | "cmd" | "command" | "super" => meta = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Check if this keybinding matches a key press.
    ///
    /// Keys compare case-insensitively: with Shift held, hosts typically
    /// report "Z" rather than "z". Every modifier the binding names must be
    /// held and Shift must agree exactly; other held modifiers are ignored,
    /// so Ctrl+Alt+Z still fires a Ctrl+Z binding.
    pub fn matches(&self, key: &str, modifiers: &Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.shift == modifiers.shift
            && (!self.ctrl || modifiers.ctrl)
            && (!self.alt || modifiers.alt)
            && (!self.meta || modifiers.meta)
    }

    /// Like [`KeyBinding::matches`], but every modifier must agree.
    pub fn matches_exactly(&self, key: &str, modifiers: &Modifiers) -> bool {
        self.matches(key, modifiers)
            && self.ctrl == modifiers.ctrl
            && self.alt == modifiers.alt
            && self.meta == modifiers.meta
    }
}

/// Resolved keybinding table used by a canvas.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: HashMap<KeyBinding, Action>,
}

impl ActionMap {
    /// Finds the action bound to a key press, if any.
    ///
    /// A binding whose modifiers agree exactly wins over one that only
    /// tolerates the extra modifiers held.
    pub fn find(&self, event: &KeyEvent) -> Option<Action> {
        let (key, modifiers) = (&event.key, &event.modifiers);
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches_exactly(key, modifiers))
            .or_else(|| {
                self.bindings
                    .iter()
                    .find(|(binding, _)| binding.matches(key, modifiers))
            })
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Configuration for the history accelerators.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z", "Meta+Z"]
/// redo = ["Ctrl+Shift+Z", "Meta+Shift+Z", "Ctrl+Y"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            redo: default_redo(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<ActionMap, String> {
        let mut bindings = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = bindings.insert(binding, action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        for binding_str in &self.undo {
            insert_binding(binding_str, Action::Undo)?;
        }

        for binding_str in &self.redo {
            insert_binding(binding_str, Action::Redo)?;
        }

        Ok(ActionMap { bindings })
    }
}

// Ctrl or Meta with Z; Shift turns undo into redo.
fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string(), "Meta+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Shift+Z".to_string(), "Meta+Shift+Z".to_string()]
}
