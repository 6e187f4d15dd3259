//! Bounding-box trimming of a finished signature.
//!
//! Everything here is a pure function over a read-only pixel buffer.

use image::Rgba;

use crate::surface::RasterSurface;

/// Inclusive content rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl TrimBounds {
    /// Grow the box by `margin` on every side, clamped to a
    /// `width` x `height` surface
    pub fn expand(self, margin: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: self.right.saturating_add(margin).min(width.saturating_sub(1)),
            bottom: self.bottom.saturating_add(margin).min(height.saturating_sub(1)),
        }
    }

    /// Size of the crop taken from these bounds.
    ///
    /// The right and bottom edges are exclusive, so the last content
    /// column and row fall outside the crop unless a margin covers them.
    /// Saved signatures have always been cropped this way.
    pub fn crop_size(&self) -> (u32, u32) {
        (
            self.right.saturating_sub(self.left),
            self.bottom.saturating_sub(self.top),
        )
    }
}

/// Locate the smallest box holding every pixel that differs from
/// `background`. An all-background surface yields all-zero bounds.
pub fn content_bounds(surface: &RasterSurface, background: Rgba<u8>) -> TrimBounds {
    let (width, height) = surface.dimensions();
    let row_has_ink = |y: u32| (0..width).any(|x| surface.pixel(x, y) != background);
    let column_has_ink = |x: u32| (0..height).any(|y| surface.pixel(x, y) != background);

    TrimBounds {
        top: (0..height).find(|&y| row_has_ink(y)).unwrap_or(0),
        bottom: (0..height).rev().find(|&y| row_has_ink(y)).unwrap_or(0),
        left: (0..width).find(|&x| column_has_ink(x)).unwrap_or(0),
        right: (0..width).rev().find(|&x| column_has_ink(x)).unwrap_or(0),
    }
}

/// Content bounds expanded by `margin` and clamped to the surface
pub fn trim_bounds(surface: &RasterSurface, background: Rgba<u8>, margin: u32) -> TrimBounds {
    let (width, height) = surface.dimensions();
    content_bounds(surface, background).expand(margin, width, height)
}

/// Crop `surface` to its content plus `margin`.
///
/// Never fails: a blank surface with no margin gives a 0x0 result.
pub fn trim(surface: &RasterSurface, background: Rgba<u8>, margin: u32) -> RasterSurface {
    if surface.is_empty() {
        return RasterSurface::new(0, 0, background);
    }

    let bounds = trim_bounds(surface, background, margin);
    let (width, height) = bounds.crop_size();
    log::debug!(
        "Trimming {}x{} surface to {:?} ({}x{})",
        surface.width(),
        surface.height(),
        bounds,
        width,
        height
    );
    surface.sub_surface(bounds.left, bounds.top, width, height)
}
