use image::{Pixel, Rgba, RgbaImage, imageops};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::path::{LivePath, PathSegment};
use crate::pen::PenStyle;
use crate::surface::RasterSurface;

/// Drawing target for the signature pad.
///
/// The pad only ever needs two primitives: blit the committed raster and
/// stroke the live path on top of it. Hosts implement this for whatever 2D
/// backend they render with.
pub trait Canvas {
    /// Draw `surface` with its top-left corner at the canvas origin
    fn draw_surface(&mut self, surface: &RasterSurface);

    /// Stroke `path` with `pen`
    fn draw_path(&mut self, path: &LivePath, pen: &PenStyle);
}

/// Software canvas that rasterizes straight into a [`RasterSurface`]
pub struct SurfaceCanvas<'a> {
    target: &'a mut RasterSurface,
}

impl<'a> SurfaceCanvas<'a> {
    pub fn new(target: &'a mut RasterSurface) -> Self {
        Self { target }
    }
}

impl Canvas for SurfaceCanvas<'_> {
    fn draw_surface(&mut self, surface: &RasterSurface) {
        imageops::replace(self.target.image_mut(), surface.image(), 0, 0);
    }

    fn draw_path(&mut self, path: &LivePath, pen: &PenStyle) {
        let Some(skia_path) = to_skia_path(path) else {
            return;
        };
        // Zero-area targets have nothing to draw into
        let Some(mut layer) = Pixmap::new(self.target.width(), self.target.height()) else {
            return;
        };

        let mut paint = Paint::default();
        let [r, g, b, a] = pen.color().0;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = pen.anti_alias();

        let stroke = Stroke {
            width: pen.width(),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        // The whole path goes into its own layer first so self-overlapping
        // curves don't darken where they cross
        layer.stroke_path(&skia_path, &paint, &stroke, Transform::identity(), None);
        composite(self.target.image_mut(), &layer);
    }
}

/// Convert the live path into a tiny-skia path.
///
/// Returns `None` when the path has no curve segments: a lone origin leaves
/// no ink.
pub fn to_skia_path(path: &LivePath) -> Option<tiny_skia::Path> {
    if !path.has_curves() {
        return None;
    }

    let mut builder = PathBuilder::new();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) => builder.move_to(p.x, p.y),
            PathSegment::QuadTo { ctrl, to } => builder.quad_to(ctrl.x, ctrl.y, to.x, to.y),
        }
    }
    builder.finish()
}

/// Source-over blend of a premultiplied layer onto a straight-alpha image.
/// Pixels the layer doesn't cover are left untouched.
fn composite(target: &mut RgbaImage, layer: &Pixmap) {
    let width = layer.width();
    for (index, src) in layer.pixels().iter().enumerate() {
        if src.alpha() == 0 {
            continue;
        }
        let src = src.demultiply();
        let x = index as u32 % width;
        let y = index as u32 / width;
        target
            .get_pixel_mut(x, y)
            .blend(&Rgba([src.red(), src.green(), src.blue(), src.alpha()]));
    }
}
