use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use image::Rgba;

use crate::error::ConfigResult;
use crate::pen::{DEFAULT_PEN_WIDTH, PenStyle};

/// User-facing settings of the signature pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct PadConfig {
    /// Pen width in pixels; non-positive values fall back to the default
    pub pen_width: i32,
    /// Pen color restored on every clear, RGBA
    pub pen_color: [u8; 4],
    /// Fill of the raster surface and the "empty" color for trimming, RGBA
    pub background_color: [u8; 4],
    /// Crop the exported image to its content
    pub trim_on_save: bool,
    /// Blank pixels kept around the content when trimming
    pub trim_margin: u32,
    /// Where the save button writes the PNG
    pub output_path: PathBuf,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            pen_width: DEFAULT_PEN_WIDTH,
            pen_color: [0, 0, 0, 255],
            background_color: [0, 0, 0, 0],
            trim_on_save: true,
            trim_margin: 10,
            output_path: PathBuf::from("signature.png"),
        }
    }
}

impl PadConfig {
    pub fn pen_color(&self) -> Rgba<u8> {
        Rgba(self.pen_color)
    }

    pub fn background_color(&self) -> Rgba<u8> {
        Rgba(self.background_color)
    }

    /// Pen style described by this config
    pub fn pen_style(&self) -> PenStyle {
        PenStyle::new(self.pen_width, self.pen_color())
    }

    /// Read a config written by [`PadConfig::save`]
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded pad config from {}", path.display());
        Ok(config)
    }

    /// Like [`PadConfig::load`], but falls back to the defaults when the file
    /// is missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Using default pad config, could not load {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write this config as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Saved pad config to {}", path.display());
        Ok(())
    }
}
