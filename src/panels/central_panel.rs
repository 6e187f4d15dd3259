use egui::epaint::QuadraticBezierShape;
use egui::{Color32, ColorImage, Context, Painter, Pos2, Rect, Stroke, TextureHandle, TextureOptions, Vec2};

use crate::SignatureApp;
use crate::canvas::Canvas;
use crate::path::LivePath;
use crate::pen::PenStyle;
use crate::surface::RasterSurface;

/// GPU copy of the raster surface, re-uploaded only when the surface changes
#[derive(Default)]
pub struct SurfaceTexture {
    handle: Option<TextureHandle>,
    // (surface id, surface version) currently uploaded
    uploaded: Option<(usize, u64)>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for SurfaceTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceTexture")
            .field("uploaded", &self.uploaded)
            .finish()
    }
}

impl SurfaceTexture {
    fn sync(&mut self, ctx: &Context, surface: &RasterSurface) -> Option<&TextureHandle> {
        if surface.is_empty() {
            return None;
        }

        let key = (surface.id(), surface.version());
        if self.uploaded != Some(key) || self.handle.is_none() {
            let size = [surface.width() as usize, surface.height() as usize];
            let image = ColorImage::from_rgba_unmultiplied(size, surface.as_raw());
            match &mut self.handle {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    self.handle = Some(ctx.load_texture("signature_surface", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded = Some(key);
        }

        self.handle.as_ref()
    }
}

/// [`Canvas`] drawing through an egui painter, with the surface origin at
/// the top-left corner of `rect`
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    texture: &'a mut SurfaceTexture,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, texture: &'a mut SurfaceTexture) -> Self {
        Self { painter, rect, texture }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn draw_surface(&mut self, surface: &RasterSurface) {
        let Some(texture) = self.texture.sync(self.painter.ctx(), surface) else {
            return;
        };
        let texture_id = texture.id();

        let size = Vec2::new(surface.width() as f32, surface.height() as f32);
        self.painter.image(
            texture_id,
            Rect::from_min_size(self.rect.min, size),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn draw_path(&mut self, path: &LivePath, pen: &PenStyle) {
        let [r, g, b, a] = pen.color().0;
        let color = Color32::from_rgba_unmultiplied(r, g, b, a);
        let stroke = Stroke::new(pen.width(), color);
        let offset = self.rect.min.to_vec2();

        for [start, ctrl, end] in path.quads() {
            self.painter.add(QuadraticBezierShape::from_points_stroke(
                [start + offset, ctrl + offset, end + offset],
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
            // Round joins between consecutive curves
            self.painter.circle_filled(end + offset, pen.width() / 2.0, color);
        }
    }
}

pub fn central_panel(app: &mut SignatureApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

        // Backdrop so transparent backgrounds stay readable
        painter.rect_filled(response.rect, 0.0, Color32::from_gray(235));

        app.handle_canvas(&response, &painter);
    });
}
