use quickqr_core::save::SaveSource;

use crate::app::QuickQrApp;
use crate::download::DownloadButton;
use crate::state::EC_LEVEL_NAMES;

pub fn show(ctx: &egui::Context, app: &mut QuickQrApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading("Website QR Code Generator");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.ui_state.input_text)
                    .hint_text("enter a URL")
                    .desired_width(380.0),
            );

            if app.ui_state.focus_input {
                response.request_focus();
                app.ui_state.focus_input = false;
            }

            // Enter commits, like the generate button.
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                app.commit_input(ctx);
                response.request_focus();
            }

            if ui.button("generate").clicked() {
                app.commit_input(ctx);
            }

            let save_name = app.config.save_name.clone();
            DownloadButton::new("download", "dlbutton", &save_name).show(
                ui,
                &app.cmd_tx,
                || Some(SaveSource::Encoded(app.session.display().image().bytes)),
            );
        });

        ui.add_space(4.0);

        egui::CollapsingHeader::new("Settings").show(ui, |ui| settings_grid(ui, app));

        ui.add_space(4.0);
    });
}

fn settings_grid(ui: &mut egui::Ui, app: &mut QuickQrApp) {
    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Endpoint");
            ui.add(
                egui::TextEdit::singleline(&mut app.config.endpoint).desired_width(300.0),
            );
            ui.end_row();

            ui.label("Image size");
            ui.add(
                egui::DragValue::new(&mut app.config.size)
                    .range(64..=1024)
                    .suffix(" px"),
            );
            ui.end_row();

            ui.label("EC level");
            egui::ComboBox::from_id_salt("ec_level")
                .selected_text(EC_LEVEL_NAMES[app.config.ec_level_index])
                .show_ui(ui, |ui| {
                    for (i, name) in EC_LEVEL_NAMES.iter().enumerate() {
                        ui.selectable_value(&mut app.config.ec_level_index, i, *name);
                    }
                });
            ui.end_row();

            ui.label("Save as");
            ui.add(
                egui::TextEdit::singleline(&mut app.config.save_name).desired_width(200.0),
            );
            ui.end_row();
        });
}
