//! PNG export ("upload") of a canvas.
//!
//! The encoded image carries a `pHYs` chunk so viewers pick up the intended
//! print density; file names come from chrono templates.

mod density;
mod file;

pub use density::{read_dpi, set_dpi};
pub use file::{DEFAULT_FILENAME_TEMPLATE, generate_filename, save_png};

use crate::canvas::{CanvasError, DrawCanvas};
use log::debug;

/// Density applied to uploads unless configured otherwise.
pub const DEFAULT_DPI: u32 = 72;

/// Encodes the canvas surface as PNG tagged with `dpi` pixels per inch.
pub fn export_png(canvas: &DrawCanvas, dpi: u32) -> Result<Vec<u8>, CanvasError> {
    let encoded = canvas.surface().to_png()?;
    let tagged = set_dpi(&encoded, dpi)?;
    debug!(
        "Exported {} as {} byte PNG at {} dpi",
        canvas.id(),
        tagged.len(),
        dpi
    );
    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasSettings;

    #[test]
    fn export_tags_density_and_keeps_dimensions() {
        let canvas = DrawCanvas::with_settings(CanvasSettings {
            width: 12,
            height: 7,
            ..CanvasSettings::default()
        })
        .unwrap();

        let png = export_png(&canvas, DEFAULT_DPI).unwrap();
        assert_eq!(read_dpi(&png), Some(72));

        let decoded = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 7));
    }
}
