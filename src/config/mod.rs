//! Configuration file support for kindraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/kindraw/config.toml`. Settings include canvas defaults,
//! history keybindings, and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, ActionMap, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// default_color = "#666666"
/// default_bgcolor = "#f0f0f0"
/// default_size = 3.0
/// max_default_width = 500
/// default_height = 500
///
/// [keybindings]
/// undo = ["Ctrl+Z", "Meta+Z"]
/// redo = ["Ctrl+Shift+Z", "Meta+Shift+Z"]
///
/// [export]
/// dpi = 72
/// filename_template = "draw"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas defaults (colors, stroke size, dimensions)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// History navigation accelerators
    #[serde(default)]
    pub keybindings: KeybindingsConfig,

    /// PNG export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by
    /// the default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_size`: 1.0 - 100.0
    /// - `max_default_width`, `default_height`: 1 - 4096
    /// - `export.dpi`: 1 - 1200
    fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.canvas.default_size) {
            warn!(
                "Invalid default_size {:.1}, clamping to 1.0-100.0 range",
                self.canvas.default_size
            );
            self.canvas.default_size = if self.canvas.default_size.is_nan() {
                types::default_size()
            } else {
                self.canvas.default_size.clamp(1.0, 100.0)
            };
        }

        if !(1..=4096).contains(&self.canvas.max_default_width) {
            warn!(
                "Invalid max_default_width {}, clamping to 1-4096 range",
                self.canvas.max_default_width
            );
            self.canvas.max_default_width = self.canvas.max_default_width.clamp(1, 4096);
        }

        if !(1..=4096).contains(&self.canvas.default_height) {
            warn!(
                "Invalid default_height {}, clamping to 1-4096 range",
                self.canvas.default_height
            );
            self.canvas.default_height = self.canvas.default_height.clamp(1, 4096);
        }

        if !(1..=1200).contains(&self.export.dpi) {
            warn!("Invalid export dpi {}, clamping to 1-1200 range", self.export.dpi);
            self.export.dpi = self.export.dpi.clamp(1, 1200);
        }

        if self.canvas.default_color.to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to {:?}",
                self.canvas.default_color,
                types::default_color()
            );
            self.canvas.default_color = types::default_color();
        }

        if self.canvas.default_bgcolor.to_color().is_none() {
            warn!(
                "Invalid default_bgcolor {:?}, falling back to {:?}",
                self.canvas.default_bgcolor,
                types::default_bgcolor()
            );
            self.canvas.default_bgcolor = types::default_bgcolor();
        }

        if let Err(err) = self.keybindings.build_action_map() {
            warn!("Invalid keybindings ({}), falling back to defaults", err);
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/kindraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("kindraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or returns defaults if the
    /// file does not exist. Loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Key lookup table built from `[keybindings]`.
    pub fn action_map(&self) -> Result<ActionMap> {
        self.keybindings
            .build_action_map()
            .map_err(|err| anyhow::anyhow!(err))
    }
}
