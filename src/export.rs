use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba};

use crate::error::{ExportError, ExportResult};
use crate::pen::TRANSPARENT;
use crate::surface::RasterSurface;
use crate::trim;

/// How a signature is written to disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOptions {
    /// Crop to the content before encoding
    pub trim: bool,
    /// Blank pixels kept around the content when trimming
    pub margin: u32,
    /// Color treated as empty when trimming
    pub background: Rgba<u8>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            trim: false,
            margin: 0,
            background: TRANSPARENT,
        }
    }
}

/// The surface exactly as it would be encoded with `options`
pub fn prepare(surface: &RasterSurface, options: &SaveOptions) -> RasterSurface {
    if options.trim {
        trim::trim(surface, options.background, options.margin)
    } else {
        surface.clone()
    }
}

/// Encode a surface as PNG bytes
pub fn encode_png(surface: &RasterSurface) -> ExportResult<Vec<u8>> {
    if surface.is_empty() {
        return Err(ExportError::EmptyImage {
            width: surface.width(),
            height: surface.height(),
        });
    }

    let mut bytes = Cursor::new(Vec::new());
    surface.image().write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write `surface` to `path` as PNG, replacing any existing file
pub fn save(surface: &RasterSurface, path: impl AsRef<Path>, options: &SaveOptions) -> ExportResult<()> {
    let path = path.as_ref();
    let output = prepare(surface, options);

    // Encode fully in memory first so a failed encode never truncates the target
    let bytes = encode_png(&output)?;
    fs::write(path, &bytes).map_err(|err| {
        log::error!("Failed to write signature to {}: {}", path.display(), err);
        err
    })?;

    log::info!(
        "Saved {}x{} signature to {} ({} bytes)",
        output.width(),
        output.height(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Decode a previously saved signature
pub fn load(path: impl AsRef<Path>) -> ExportResult<RasterSurface> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?;
    log::debug!("Loaded signature {}: {}x{}", path.display(), img.width(), img.height());
    Ok(RasterSurface::from_image(img.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::{BLACK, WHITE};

    #[test]
    fn test_empty_surface_cannot_be_encoded() {
        let surface = RasterSurface::new(0, 0, WHITE);
        assert!(matches!(
            encode_png(&surface),
            Err(ExportError::EmptyImage { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_encode_produces_png_signature() {
        let surface = RasterSurface::new(3, 2, BLACK);
        let bytes = encode_png(&surface).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_prepare_without_trim_keeps_everything() {
        let surface = RasterSurface::new(8, 8, WHITE);
        assert_eq!(prepare(&surface, &SaveOptions::default()).dimensions(), (8, 8));
    }
}
