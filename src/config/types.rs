//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas defaults applied when the drawing panel opens.
///
/// These mirror the attributes of the canvas; users change them at runtime
/// through the panel inputs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Stroke color - hex (`"#666666"`), a named color, or an RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Background fill color, same formats as `default_color`
    #[serde(default = "default_bgcolor")]
    pub default_bgcolor: ColorSpec,

    /// Stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_size")]
    pub default_size: f64,

    /// Upper bound for the initial canvas width; the panel uses the
    /// comment form's width when it is narrower (valid range: 1 - 4096)
    #[serde(default = "default_max_width")]
    pub max_default_width: u32,

    /// Initial canvas height in pixels (valid range: 1 - 4096)
    #[serde(default = "default_height")]
    pub default_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_bgcolor: default_bgcolor(),
            default_size: default_size(),
            max_default_width: default_max_width(),
            default_height: default_height(),
        }
    }
}

/// Settings for the PNG produced by "Upload".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Physical density written into the PNG (valid range: 1 - 1200)
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// File name template without extension; chrono format specifiers
    /// such as `%Y-%m-%d` are expanded
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            filename_template: default_filename_template(),
        }
    }
}

pub(super) fn default_color() -> ColorSpec {
    ColorSpec::Name("#666666".to_string())
}

pub(super) fn default_bgcolor() -> ColorSpec {
    ColorSpec::Name("#f0f0f0".to_string())
}

pub(super) fn default_size() -> f64 {
    3.0
}

pub(super) fn default_max_width() -> u32 {
    500
}

pub(super) fn default_height() -> u32 {
    500
}

pub(super) fn default_dpi() -> u32 {
    crate::export::DEFAULT_DPI
}

fn default_filename_template() -> String {
    crate::export::DEFAULT_FILENAME_TEMPLATE.to_string()
}
