// src/renderer.rs
use std::path::Path;

use image::Rgba;

use crate::canvas::{Canvas, SurfaceCanvas};
use crate::config::PadConfig;
use crate::error::ExportResult;
use crate::event::{EventBus, PadEvent};
use crate::export::{self, SaveOptions};
use crate::input::InputEvent;
use crate::path::{LivePath, Point, midpoint};
use crate::pen::PenStyle;
use crate::surface::RasterSurface;

/// Moves shorter than this on both axes are treated as jitter
pub const MOVE_THRESHOLD: f32 = 3.0;

/// Turns pointer drags into smoothed ink and keeps the committed raster.
///
/// Intermediate motion only ever changes the live path; the raster surface
/// is written exclusively when a stroke ends, so abandoning a stroke midway
/// leaves the committed pixels untouched.
#[derive(Debug)]
pub struct StrokeRenderer {
    surface: RasterSurface,
    live_path: LivePath,
    // Last accepted sample; `None` while no stroke is in progress
    current: Option<Point>,
    pen: PenStyle,
    configured_pen_color: Rgba<u8>,
    background: Rgba<u8>,
    touched: bool,
    events: EventBus,
}

impl StrokeRenderer {
    /// Creates a pad of the given size with default settings
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, &PadConfig::default())
    }

    /// Creates a pad of the given size using `config`
    pub fn with_config(width: u32, height: u32, config: &PadConfig) -> Self {
        let background = config.background_color();
        Self {
            surface: RasterSurface::new(width, height, background),
            live_path: LivePath::new(),
            current: None,
            pen: config.pen_style(),
            configured_pen_color: config.pen_color(),
            background,
            touched: false,
            events: EventBus::new(),
        }
    }

    /// Pointer went down at `p`
    pub fn on_stroke_start(&mut self, p: Point) {
        self.live_path.move_to(p);
        self.current = Some(p);
        self.events.emit(PadEvent::StrokeStarted { origin: p });
        self.events.emit(PadEvent::RepaintRequested);
    }

    /// Pointer dragged to `p`
    pub fn on_stroke_move(&mut self, p: Point) {
        self.touched = true;

        let Some(previous) = self.current else {
            log::debug!("Move at {:?} without a stroke in progress, starting one", p);
            self.on_stroke_start(p);
            return;
        };

        let dx = (p.x - previous.x).abs();
        let dy = (p.y - previous.y).abs();
        if dx >= MOVE_THRESHOLD || dy >= MOVE_THRESHOLD {
            // The previous sample steers the curve and the midpoint ends it,
            // so the path runs near every sample without passing through it
            self.live_path.quad_to(previous, midpoint(previous, p));
            self.current = Some(p);
            self.events.emit(PadEvent::StrokeExtended {
                segments: self.live_path.len(),
            });
        }

        self.events.emit(PadEvent::RepaintRequested);
    }

    /// Pointer released: bake the live path into the raster surface
    pub fn on_stroke_end(&mut self) {
        if self.current.take().is_none() {
            return;
        }

        let segments = self.live_path.len();
        SurfaceCanvas::new(&mut self.surface).draw_path(&self.live_path, &self.pen);
        self.live_path.reset();

        log::debug!("Committed stroke with {} segments", segments);
        self.events.emit(PadEvent::StrokeCommitted { segments });
        self.events.emit(PadEvent::RepaintRequested);
    }

    /// Route a host input event to the matching stroke operation
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Down(p) => self.on_stroke_start(p),
            InputEvent::Move(p) => self.on_stroke_move(p),
            InputEvent::Up => self.on_stroke_end(),
        }
    }

    /// Draw the committed raster, then the live path on top
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_surface(&self.surface);
        if self.live_path.has_curves() {
            canvas.draw_path(&self.live_path, &self.pen);
        }
    }

    /// What [`StrokeRenderer::render`] currently shows, as a fresh surface
    pub fn frame(&self) -> RasterSurface {
        let mut frame = RasterSurface::new(self.surface.width(), self.surface.height(), self.background);
        self.render(&mut SurfaceCanvas::new(&mut frame));
        frame
    }

    /// Wipe the pad back to the background and restore the configured pen color
    pub fn clear(&mut self) {
        self.surface.fill(self.background);
        self.touched = false;
        self.pen.set_color(self.configured_pen_color);
        self.live_path.reset();
        self.current = None;

        log::info!("Signature pad cleared");
        self.events.emit(PadEvent::Cleared);
        self.events.emit(PadEvent::RepaintRequested);
    }

    /// Reallocate the surface at a new size, discarding its content
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = RasterSurface::new(width, height, self.background);
        self.touched = false;
        self.live_path.reset();
        self.current = None;

        log::info!("Signature surface resized to {}x{}", width, height);
        self.events.emit(PadEvent::Resized { width, height });
        self.events.emit(PadEvent::RepaintRequested);
    }

    /// Host notification that the display area may have changed.
    /// Returns true when the surface was reallocated.
    pub fn on_surface_resize(&mut self, width: u32, height: u32) -> bool {
        if self.surface.dimensions() == (width, height) {
            return false;
        }
        self.resize(width, height);
        true
    }

    pub fn set_pen_width(&mut self, px: i32) {
        self.pen.set_width(px);
    }

    /// Change the ink color of the next strokes. `clear` restores the
    /// configured color.
    pub fn set_pen_color(&mut self, color: Rgba<u8>) {
        self.pen.set_color(color);
    }

    /// Used by the next fill (clear/resize) and by trimming
    pub fn set_background_color(&mut self, color: Rgba<u8>) {
        self.background = color;
    }

    /// Adopt `config` for subsequent strokes and fills. Committed pixels are
    /// left as they are.
    pub fn apply_config(&mut self, config: &PadConfig) {
        self.pen = config.pen_style();
        self.configured_pen_color = config.pen_color();
        self.background = config.background_color();
    }

    /// True once any drag motion was recorded since the last clear or resize
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Owned snapshot of the full, untrimmed raster
    pub fn raw_image(&self) -> RasterSurface {
        self.surface.clone()
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn live_path(&self) -> &LivePath {
        &self.live_path
    }

    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// True between a stroke's start and end
    pub fn is_stroke_in_progress(&self) -> bool {
        self.current.is_some()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Write the pad to `path` as PNG, optionally cropped to its content
    /// using the current background as the empty color
    pub fn save(&self, path: impl AsRef<Path>, trim: bool, margin: u32) -> ExportResult<()> {
        let options = SaveOptions {
            trim,
            margin,
            background: self.background,
        };
        export::save(&self.raw_image(), path, &options)
    }
}
