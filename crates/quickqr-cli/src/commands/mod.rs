pub mod fetch;
pub mod placeholder;
pub mod url;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use quickqr_core::config::FetchConfig;
use quickqr_core::request::{EcLevel, QrRequest};

/// Request parameters shared by `url` and `fetch`.
#[derive(Args)]
pub struct RequestArgs {
    /// Text to encode (usually a URL)
    pub text: String,

    /// Requested image size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Error-correction level (L, M, Q, H)
    #[arg(long)]
    pub ec_level: Option<EcLevel>,

    /// QR service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// TOML config file providing defaults for the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RequestArgs {
    pub fn to_request(&self) -> Result<QrRequest> {
        let config = match &self.config {
            Some(path) => FetchConfig::load(path)?,
            None => FetchConfig::default(),
        };

        let mut request = config.request_for(&self.text);
        if let Some(size) = self.size {
            request.size = size;
        }
        if let Some(level) = self.ec_level {
            request.ec_level = level;
        }
        if let Some(ref endpoint) = self.endpoint {
            request.endpoint = endpoint.clone();
        }
        Ok(request)
    }
}
