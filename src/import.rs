//! Loading a bitmap onto the canvas as a replayable history step.

use crate::canvas::{CanvasError, DrawCanvas};
use crate::draw::render_image_scaled;
use crate::history::ExternalStep;
use cairo::ImageSurface;
use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A decoded bitmap ready to be painted.
///
/// Cloning is cheap; the pixel data is shared.
#[derive(Clone, Debug)]
pub struct ImportedImage {
    surface: ImageSurface,
}

impl ImportedImage {
    /// Decodes PNG data from any reader.
    pub fn from_png_reader<R: Read>(reader: &mut R) -> Result<Self, CanvasError> {
        let surface = ImageSurface::create_from_png(reader)?;
        Self::from_surface(surface)
    }

    pub fn from_path(path: &Path) -> Result<Self, CanvasError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_png_reader(&mut reader)
    }

    /// Wraps an already decoded surface, rejecting images without pixels.
    pub fn from_surface(surface: ImageSurface) -> Result<Self, CanvasError> {
        if surface.width() <= 0 || surface.height() <= 0 {
            return Err(CanvasError::InvalidImage(format!(
                "image has no pixels ({}x{})",
                surface.width(),
                surface.height()
            )));
        }
        Ok(Self { surface })
    }

    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Canvas height that keeps this image's aspect ratio at `width`.
    /// Fractional results are truncated.
    pub fn height_for_width(&self, width: u32) -> u32 {
        let scaled = u64::from(self.height()) * u64::from(width) / u64::from(self.width());
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

/// Paints `image` across the whole canvas and records it in the history.
///
/// The canvas keeps its width; its height is changed so the image keeps its
/// aspect ratio. That resize replays the existing history first, then the
/// image is painted on top and pushed as an external step, so undo removes
/// it and every later redraw stretches it to the canvas size of that time.
pub fn import_image(canvas: &mut DrawCanvas, image: &ImportedImage) -> Result<(), CanvasError> {
    let width = canvas.width();
    if width == 0 {
        return Err(CanvasError::InvalidImage(
            "cannot fit an image into a zero-width canvas".to_string(),
        ));
    }

    let height = image.height_for_width(width);
    canvas.set_height(height)?;

    let label = format!("image {}x{}", image.width(), image.height());
    let surface = image.surface.clone();
    let step = ExternalStep::new(label.clone(), move |target| {
        render_image_scaled(
            target.context(),
            &surface,
            f64::from(target.width()),
            f64::from(target.height()),
        )?;
        Ok(())
    });
    canvas.push_step(step)?;

    info!("Imported {} into {} at {}x{}", label, canvas.id(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasSettings;
    use crate::history::EntrySummary;

    fn solid_png(width: i32, height: i32) -> Vec<u8> {
        let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.0, 0.0, 1.0);
        ctx.paint().unwrap();
        drop(ctx);
        let mut out = Vec::new();
        surface.write_to_png(&mut out).unwrap();
        out
    }

    fn canvas(width: u32) -> DrawCanvas {
        DrawCanvas::with_settings(CanvasSettings {
            width,
            height: 10,
            ..CanvasSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn height_follows_aspect_ratio() {
        let image = ImportedImage::from_png_reader(&mut solid_png(40, 30).as_slice()).unwrap();
        assert_eq!(image.height_for_width(20), 15);
        assert_eq!(image.height_for_width(30), 22);
    }

    #[test]
    fn import_resizes_and_records_step() {
        let mut canvas = canvas(20);
        let image = ImportedImage::from_png_reader(&mut solid_png(40, 30).as_slice()).unwrap();

        import_image(&mut canvas, &image).unwrap();

        assert_eq!((canvas.width(), canvas.height()), (20, 15));
        assert_eq!(canvas.history().current_step(), 1);
        assert_eq!(
            canvas.history().entries()[0].summary(),
            EntrySummary::External {
                label: "image 40x30".to_string()
            }
        );

        let data = canvas.surface().snapshot().unwrap();
        let last = data.len() - 4;
        // BGRA: opaque blue in both corners
        assert_eq!(&data[0..4], &[255, 0, 0, 255]);
        assert_eq!(&data[last..], &[255, 0, 0, 255]);

        canvas.undo().unwrap();
        let data = canvas.surface().snapshot().unwrap();
        assert_eq!(&data[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn zero_width_canvas_is_rejected() {
        let mut canvas = canvas(0);
        let image = ImportedImage::from_png_reader(&mut solid_png(4, 4).as_slice()).unwrap();
        assert!(matches!(
            import_image(&mut canvas, &image),
            Err(CanvasError::InvalidImage(_))
        ));
        assert!(canvas.history().is_empty());
    }

    #[test]
    fn undecodable_data_is_an_error() {
        let result = ImportedImage::from_png_reader(&mut &b"definitely not png"[..]);
        assert!(matches!(result, Err(CanvasError::Png(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImportedImage::from_path(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(CanvasError::Io(_))));
    }
}
