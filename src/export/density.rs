//! Physical pixel density of encoded PNG data.

use crate::canvas::CanvasError;
use png::{PixelDimensions, Unit};

const METERS_PER_INCH: f64 = 0.0254;

fn pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

/// Re-encodes `png` with a density of `dpi` pixels per inch.
///
/// Pixel data, color type and bit depth are kept as decoded; any density
/// the input declared is replaced.
pub fn set_dpi(png: &[u8], dpi: u32) -> Result<Vec<u8>, CanvasError> {
    let decoder = png::Decoder::new(png);
    let mut reader = decoder.read_info()?;
    let mut pixels = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels)?;

    let ppm = pixels_per_meter(dpi);
    let mut out = Vec::with_capacity(png.len() + 21);
    {
        let mut encoder = png::Encoder::new(&mut out, frame.width, frame.height);
        encoder.set_color(frame.color_type);
        encoder.set_depth(frame.bit_depth);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels[..frame.buffer_size()])?;
        writer.finish()?;
    }
    Ok(out)
}

/// Reads the horizontal density of an encoded PNG, if it declares one in
/// pixels per meter.
pub fn read_dpi(png: &[u8]) -> Option<u32> {
    let reader = png::Decoder::new(png).read_info().ok()?;
    let dims = reader.info().pixel_dims?;
    match dims.unit {
        Unit::Meter => Some((f64::from(dims.xppu) * METERS_PER_INCH).round() as u32),
        Unit::Unspecified => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 3, 2).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgb(0.0, 0.5, 1.0);
            ctx.paint().unwrap();
        }
        let mut out = Vec::new();
        surface.write_to_png(&mut out).unwrap();
        out
    }

    fn decode_pixels(png: &[u8]) -> Vec<u8> {
        let mut reader = png::Decoder::new(png).read_info().unwrap();
        let mut pixels = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut pixels).unwrap();
        pixels.truncate(frame.buffer_size());
        pixels
    }

    #[test]
    fn seventy_two_dpi_is_2835_pixels_per_meter() {
        assert_eq!(pixels_per_meter(72), 2835);
        assert_eq!(pixels_per_meter(300), 11811);
    }

    #[test]
    fn density_is_written_and_pixels_kept() {
        let original = sample_png();
        let tagged = set_dpi(&original, 72).unwrap();

        assert_eq!(read_dpi(&tagged), Some(72));
        assert_eq!(decode_pixels(&tagged), decode_pixels(&original));

        // Still decodable by cairo
        let decoded = cairo::ImageSurface::create_from_png(&mut tagged.as_slice()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn rewriting_replaces_existing_density() {
        let once = set_dpi(&sample_png(), 96).unwrap();
        let twice = set_dpi(&once, 150).unwrap();
        assert_eq!(read_dpi(&twice), Some(150));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            set_dpi(b"not a png", 72),
            Err(CanvasError::PngDecode(_))
        ));
        let mut truncated = sample_png();
        truncated.truncate(20);
        assert!(set_dpi(&truncated, 72).is_err());
        assert_eq!(read_dpi(b"nope"), None);
    }
}
