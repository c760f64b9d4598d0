use std::sync::mpsc;

use quickqr_core::session::{DisplayImage, QrSession};
use tracing::warn;

use crate::convert::qr_image_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ConfigState, UIState, ViewportState};
use crate::worker;

pub struct QuickQrApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    /// Owns the target text and the displayed image; the only writer of
    /// either. Everything else reads through it.
    pub session: QrSession,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: ConfigState,
    pub show_about: bool,
}

impl QuickQrApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: QrSession::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            config: ConfigState::default(),
            show_about: false,
        };
        app.update_display_texture(ctx);
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FetchSettled { seq, outcome } => {
                    let applied = match outcome {
                        Ok(image) => self.session.settle(seq, Some(image)),
                        Err(message) => {
                            // Failure is absorbed: the placeholder is the
                            // only user-visible signal.
                            warn!(seq, %message, "QR fetch failed");
                            self.session.settle(seq, None)
                        }
                    };
                    if applied {
                        self.update_display_texture(ctx);
                    }
                }
                WorkerResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = ConfigState::from_fetch_config(&config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Commit the input box contents as the new target text. An empty
    /// commit resets to the placeholder; anything else issues one fetch.
    pub fn commit_input(&mut self, ctx: &egui::Context) {
        let text = self.ui_state.input_text.clone();
        match self.session.commit(text) {
            Some(ticket) => {
                let request = self.config.to_fetch_config().request_for(ticket.text);
                self.send_command(WorkerCommand::Fetch {
                    seq: ticket.seq,
                    request,
                });
            }
            None => self.update_display_texture(ctx),
        }
    }

    /// Encoded bytes of whatever is currently displayed, for saving.
    pub fn display_bytes(&self) -> Vec<u8> {
        self.session.display().image().bytes
    }

    /// Re-upload the session's display image as the viewport texture.
    /// Replacing the handle frees the previous GPU allocation.
    fn update_display_texture(&mut self, ctx: &egui::Context) {
        let display = self.session.display();
        let image = match qr_image_to_color_image(&display.image()) {
            Ok(img) => img,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        let size = image.size;
        let texture = ctx.load_texture("qr-display", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = match display {
            DisplayImage::Placeholder => String::new(),
            DisplayImage::Generated(_) => self.session.target_text().to_string(),
        };
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for QuickQrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About QuickQR")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("QuickQR");
                        ui.label("Website QR Code Generator");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        ui.label("QR codes generated via quickchart.io");
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
