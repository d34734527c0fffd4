//! Raster surface backing a drawing canvas.

use super::color::Color;
use super::render;
use crate::canvas::CanvasError;
use cairo::{Context, Format, ImageSurface};

/// Cairo image surface plus the context every paint operation goes through.
///
/// The logical size and the pixel size are always identical; there is no
/// device-pixel scaling.
pub struct CanvasSurface {
    image: ImageSurface,
    ctx: Context,
}

impl CanvasSurface {
    /// Creates a fully transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let image = ImageSurface::create(Format::ARgb32, to_i32(width)?, to_i32(height)?)?;
        let ctx = Context::new(&image)?;
        Ok(Self { image, ctx })
    }

    /// Recreates the backing image at a new size. Existing pixels are lost,
    /// even when the size does not change.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.image.width().max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.image.height().max(0) as u32
    }

    /// Drawing context targeting this surface.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Fills the entire surface with `color`.
    pub fn fill(&self, color: Color) -> Result<(), CanvasError> {
        render::render_background(&self.ctx, color)?;
        Ok(())
    }

    /// Copies the current pixels out as raw ARGB32 rows (stride included).
    pub fn snapshot(&self) -> Result<Vec<u8>, CanvasError> {
        self.image.flush();
        let mut copy = ImageSurface::create(Format::ARgb32, self.image.width(), self.image.height())?;
        {
            let ctx = Context::new(&copy)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.image, 0.0, 0.0)?;
            ctx.paint()?;
        }
        copy.flush();
        let data = copy.data()?;
        Ok(data.to_vec())
    }

    /// Encodes the current pixels as a PNG image.
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.image.flush();
        let mut buffer = Vec::new();
        self.image.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

impl std::fmt::Debug for CanvasSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn to_i32(value: u32) -> Result<i32, CanvasError> {
    i32::try_from(value).map_err(|_| CanvasError::InvalidAttribute {
        name: "dimension".to_string(),
        value: value.to_string(),
    })
}
