use image::{Rgba, RgbaImage, imageops};
use std::sync::atomic::{AtomicUsize, Ordering};

// Static counter for generating unique surface IDs
static NEXT_SURFACE_ID: AtomicUsize = AtomicUsize::new(1);

/// Fixed-size RGBA pixel buffer holding every committed stroke
#[derive(Clone)]
pub struct RasterSurface {
    id: usize,
    pixels: RgbaImage,
    version: u64, // Bumped on every mutation so hosts can cache textures
}

// Custom Debug implementation so the pixel data doesn't flood the output
impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("version", &self.version)
            .finish()
    }
}

impl RasterSurface {
    /// Create a surface uniformly filled with `fill`
    pub fn new(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, fill))
    }

    /// Wrap an existing image
    pub fn from_image(pixels: RgbaImage) -> Self {
        let id = NEXT_SURFACE_ID.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            pixels,
            version: 0,
        }
    }

    /// Unique identifier of this allocation; clones share it
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// True when the surface holds no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Mutable access to the pixels; counts as a modification
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        self.touch();
        &mut self.pixels
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
        self.touch();
    }

    /// True when every pixel equals `color`
    pub fn is_uniform(&self, color: Rgba<u8>) -> bool {
        self.pixels.pixels().all(|pixel| *pixel == color)
    }

    /// Copy out the `width` x `height` region whose top-left corner is `(x, y)`
    pub fn sub_surface(&self, x: u32, y: u32, width: u32, height: u32) -> RasterSurface {
        let region = imageops::crop_imm(&self.pixels, x, y, width, height).to_image();
        RasterSurface::from_image(region)
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
