use crate::config::PadConfig;
use crate::event::RepaintHandler;
use crate::input::InputHandler;
use crate::panels::{self, EguiCanvas, SurfaceTexture};
use crate::renderer::StrokeRenderer;

/// We derive Deserialize/Serialize so we can persist the pad settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SignatureApp {
    config: PadConfig,

    // The pad is created on the first frame, once the canvas size is known
    #[serde(skip)]
    pad: Option<StrokeRenderer>,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    texture: SurfaceTexture,
    #[serde(skip)]
    status: Option<String>,
}

impl SignatureApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }

        Default::default()
    }

    /// Start with `config` instead of whatever was persisted
    pub fn with_config(config: PadConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PadConfig {
        &mut self.config
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_touched(&self) -> bool {
        self.pad.as_ref().is_some_and(StrokeRenderer::is_touched)
    }

    /// Push the current settings to the pad
    pub fn apply_config(&mut self) {
        if let Some(pad) = &mut self.pad {
            pad.apply_config(&self.config);
        }
    }

    /// Wipe the signature and re-apply the configured pen
    pub fn clear(&mut self) {
        if let Some(pad) = &mut self.pad {
            pad.clear();
            pad.apply_config(&self.config);
        }
        self.status = None;
    }

    /// Export the signature to the configured file
    pub fn save_signature(&mut self) {
        let Some(pad) = self.pad.as_ref().filter(|pad| pad.is_touched()) else {
            self.status = Some("Nothing to save: the pad has not been signed".to_owned());
            return;
        };

        let config = &self.config;
        self.status = Some(match pad.save(&config.output_path, config.trim_on_save, config.trim_margin) {
            Ok(()) => format!("Saved to {}", config.output_path.display()),
            Err(err) => {
                log::error!("Saving signature failed: {}", err);
                format!("Save failed: {}", err)
            }
        });
    }

    /// Feed canvas input to the pad and draw it
    pub fn handle_canvas(&mut self, response: &egui::Response, painter: &egui::Painter) {
        let rect = response.rect;
        let width = rect.width().max(0.0).round() as u32;
        let height = rect.height().max(0.0).round() as u32;

        let pad = self.pad.get_or_insert_with(|| {
            let pad = StrokeRenderer::with_config(width, height, &self.config);
            pad.events().subscribe(Box::new(RepaintHandler::new(response.ctx.clone())));
            pad
        });
        pad.on_surface_resize(width, height);

        self.input.set_canvas_rect(rect);
        for event in self.input.process_response(response) {
            pad.handle_input(event);
        }

        pad.render(&mut EguiCanvas::new(painter, rect, &mut self.texture));
    }
}

impl eframe::App for SignatureApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
