//! Configuration enum types.

use crate::draw::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a CSS-style color string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex or named color
/// default_color = "#666666"
/// default_bgcolor = "white"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rgb`, `#rrggbb`, `#rrggbbaa`, or a named color
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Returns `None` for strings that are neither hex nor a known name.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => name.parse().ok(),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_hex())
    }
}
