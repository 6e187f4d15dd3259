use crate::event::{EventHandler, PadEvent};

/// Forwards repaint requests to egui
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &PadEvent) {
        if *event == PadEvent::RepaintRequested {
            self.ctx.request_repaint();
        }
    }
}
