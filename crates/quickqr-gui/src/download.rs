use std::sync::mpsc;

use quickqr_core::save::{SaveRequest, SaveSource};

use crate::messages::WorkerCommand;

/// Generic save-to-file button.
///
/// The source is resolved by the caller-supplied closure when the button
/// is clicked, not when the widget is built, so the most recent content
/// is what gets saved. A click that resolves to no source does nothing.
pub struct DownloadButton<'a> {
    label: &'a str,
    id: &'a str,
    file_name: &'a str,
}

impl<'a> DownloadButton<'a> {
    pub fn new(label: &'a str, id: &'a str, file_name: &'a str) -> Self {
        Self {
            label,
            id,
            file_name,
        }
    }

    pub fn show<F>(self, ui: &mut egui::Ui, cmd_tx: &mpsc::Sender<WorkerCommand>, resolve: F)
    where
        F: FnOnce() -> Option<SaveSource>,
    {
        let clicked = ui
            .push_id(self.id, |ui| ui.button(self.label).clicked())
            .inner;
        if !clicked {
            return;
        }

        let request = SaveRequest::new(resolve(), self.file_name);
        let Ok(Some(bytes)) = request.resolve() else {
            return;
        };
        prompt_and_save(cmd_tx, request.file_name, bytes);
    }
}

/// Open a save dialog seeded with `file_name` on a helper thread and hand
/// the chosen path plus bytes to the worker. Shared with the menu bar.
pub fn prompt_and_save(cmd_tx: &mpsc::Sender<WorkerCommand>, file_name: String, bytes: Vec<u8>) {
    let cmd_tx = cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("All files", &["*"])
            .set_file_name(file_name.as_str())
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::Save { path, bytes });
        }
    });
}
