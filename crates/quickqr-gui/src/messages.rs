use std::path::PathBuf;

use quickqr_core::client::QrImage;
use quickqr_core::request::QrRequest;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch the QR image for one committed target text. `seq` tags the
    /// attempt so the UI can drop outcomes of superseded requests.
    Fetch { seq: u64, request: QrRequest },

    /// Write already-resolved bytes to disk.
    Save { path: PathBuf, bytes: Vec<u8> },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A fetch attempt settled, successfully or not. The error text is
    /// only logged; the displayed fallback is the same either way.
    FetchSettled {
        seq: u64,
        outcome: Result<QrImage, String>,
    },

    Saved {
        path: PathBuf,
    },
    /// A config file picked in the menu bar finished loading.
    ConfigImported {
        config: quickqr_core::config::FetchConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
