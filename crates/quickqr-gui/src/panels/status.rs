use crate::app::QuickQrApp;
use crate::state::EC_LEVEL_NAMES;

pub fn show(ctx: &egui::Context, app: &mut QuickQrApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Busy indicator
        ui.horizontal(|ui| {
            if app.session.is_fetching() {
                ui.spinner();
                ui.label("Generating...");
            } else {
                // Same height, no animation
                ui.label("");
            }
        });

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("EC level: {}", EC_LEVEL_NAMES[app.config.ec_level_index]));
            ui.separator();
            ui.label(format!("Save as: {}", app.config.save_name));
        });

        ui.add_space(2.0);
    });
}
