use crate::SignatureApp;

pub fn tools_panel(app: &mut SignatureApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Signature");

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                if ui.button("Save").clicked() {
                    app.save_signature();
                }
            });

            ui.label(if app.is_touched() { "Signed" } else { "Not signed yet" });
            if let Some(status) = app.status() {
                ui.label(status);
            }

            ui.separator();
            ui.heading("Pen");

            let mut changed = false;
            let config = app.config_mut();

            ui.horizontal(|ui| {
                ui.label("Width:");
                changed |= ui.add(egui::Slider::new(&mut config.pen_width, 1..=50)).changed();
            });
            ui.horizontal(|ui| {
                ui.label("Color:");
                changed |= ui.color_edit_button_srgba_unmultiplied(&mut config.pen_color).changed();
            });
            ui.horizontal(|ui| {
                ui.label("Background:");
                changed |= ui
                    .color_edit_button_srgba_unmultiplied(&mut config.background_color)
                    .changed();
            });
            ui.small("A new background shows after the next clear.");

            ui.separator();
            ui.heading("Export");

            changed |= ui.checkbox(&mut config.trim_on_save, "Trim blank edges").changed();
            ui.add_enabled_ui(config.trim_on_save, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Margin:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut config.trim_margin).range(0..=200))
                        .changed();
                });
            });

            let mut output_path = config.output_path.display().to_string();
            ui.horizontal(|ui| {
                ui.label("File:");
                if ui.text_edit_singleline(&mut output_path).changed() {
                    config.output_path = output_path.into();
                    changed = true;
                }
            });

            if changed {
                log::debug!("Pad settings changed");
                app.apply_config();
            }
        });
}
