#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use signature_pad::{PadConfig, SignatureApp};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // An optional JSON settings file overrides the persisted settings
    let config = std::env::args().nth(1).map(|path| PadConfig::load_or_default(path));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 360.0])
            .with_min_inner_size([320.0, 200.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Signature Pad",
        native_options,
        Box::new(|cc| {
            let app = match config {
                Some(config) => SignatureApp::with_config(config),
                None => SignatureApp::new(cc),
            };
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
