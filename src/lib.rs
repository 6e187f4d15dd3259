#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod path;
pub mod pen;
pub mod renderer;
pub mod surface;
pub mod trim;

pub use app::SignatureApp;
pub use canvas::{Canvas, SurfaceCanvas};
pub use config::PadConfig;
pub use error::{ConfigError, ExportError};
pub use event::{EventBus, EventHandler, PadEvent};
pub use export::SaveOptions;
pub use input::{InputEvent, InputHandler};
pub use path::{LivePath, PathSegment, Point};
pub use pen::PenStyle;
pub use renderer::StrokeRenderer;
pub use surface::RasterSurface;
pub use trim::{TrimBounds, trim};
