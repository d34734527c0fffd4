//! Cairo-based rendering functions for strokes, backgrounds, and bitmaps.

use super::color::Color;
use super::segment::Segment;

/// Fills the whole target with a solid background color.
///
/// Uses the `Source` operator so a translucent background replaces the
/// previous pixels instead of blending over them.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `color` - Background color
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}

/// Renders a single stroke segment with round caps and joins.
///
/// Each segment is stroked as its own path, the same way live drawing
/// paints it.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment) -> Result<(), cairo::Error> {
    let color = segment.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(segment.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke()
}

/// Renders all segments in order (first segment = bottom layer).
pub fn render_segments(ctx: &cairo::Context, segments: &[Segment]) -> Result<(), cairo::Error> {
    for segment in segments {
        render_segment(ctx, segment)?;
    }
    Ok(())
}

/// Paints a bitmap stretched to cover `width` x `height` from the origin.
///
/// Degenerate images (zero width or height) paint nothing.
pub fn render_image_scaled(
    ctx: &cairo::Context,
    image: &cairo::ImageSurface,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (image_width, image_height) = (image.width(), image.height());
    if image_width <= 0 || image_height <= 0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.scale(width / image_width as f64, height / image_height as f64);
    ctx.set_source_surface(image, 0.0, 0.0)?;
    ctx.source().set_extend(cairo::Extend::Pad);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}
