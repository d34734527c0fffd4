//! Rendering primitives for the drawing canvas (Cairo-based).
//!
//! This module defines the raster-level building blocks:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`] and [`Segment`]: the geometry a freehand stroke is made of
//! - [`CanvasSurface`]: the Cairo image surface strokes are painted onto
//! - Rendering functions shared by live drawing and history replay

pub mod color;
pub mod render;
pub mod segment;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{render_background, render_image_scaled, render_segment, render_segments};
pub use segment::{Point, Segment};
pub use surface::CanvasSurface;

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
