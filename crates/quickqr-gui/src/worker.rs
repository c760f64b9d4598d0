use std::sync::mpsc;

use quickqr_core::client::QrClient;
use quickqr_core::request::QrRequest;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("quickqr-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let client = match QrClient::new() {
        Ok(c) => c,
        Err(e) => {
            send_error(&tx, &ctx, format!("Failed to create HTTP client: {e}"));
            return;
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Fetch { seq, request } => {
                handle_fetch(&client, seq, &request, &tx, &ctx);
            }
            WorkerCommand::Save { path, bytes } => {
                handle_save(&path, &bytes, &tx, &ctx);
            }
        }
    }
}

fn handle_fetch(
    client: &QrClient,
    seq: u64,
    request: &QrRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = std::time::Instant::now();
    let outcome = client.fetch(request).map_err(|e| e.to_string());
    if outcome.is_ok() {
        send_log(
            tx,
            ctx,
            format!("Generated in {}ms", start.elapsed().as_millis()),
        );
    }
    send(tx, ctx, WorkerResult::FetchSettled { seq, outcome });
}

fn handle_save(
    path: &std::path::Path,
    bytes: &[u8],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match std::fs::write(path, bytes) {
        Ok(()) => send(tx, ctx, WorkerResult::Saved { path: path.to_path_buf() }),
        Err(e) => send_error(tx, ctx, format!("Failed to save: {e}")),
    }
}
