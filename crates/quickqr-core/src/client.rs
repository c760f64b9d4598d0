use std::time::Duration;

use tracing::debug;

use crate::consts::HTTP_TIMEOUT_SECS;
use crate::error::{QuickQrError, Result};
use crate::request::QrRequest;

/// Encoded image bytes plus the dimensions found while validating them.
///
/// The bytes are kept exactly as received so a later save writes what was
/// fetched, not a re-encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl QrImage {
    /// Wrap encoded bytes, failing if they are not a decodable image.
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let decoded = image::load_from_memory(&bytes)?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }

    /// Decode to RGBA pixels for display.
    pub fn to_rgba(&self) -> Result<image::RgbaImage> {
        Ok(image::load_from_memory(&self.bytes)?.to_rgba8())
    }
}

/// Blocking HTTP client for the QR generation service.
pub struct QrClient {
    http: reqwest::blocking::Client,
}

impl QrClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    /// Issue exactly one GET for the request and return the image body.
    ///
    /// Non-2xx statuses, transport failures, and undecodable bodies are
    /// all errors; the caller decides what to show instead. No retries.
    pub fn fetch(&self, request: &QrRequest) -> Result<QrImage> {
        let url = request.url()?;
        debug!(%url, "fetching QR image");

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuickQrError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        let image = QrImage::from_encoded(body.to_vec())?;
        debug!(
            bytes = image.bytes.len(),
            width = image.width,
            height = image.height,
            "QR image fetched"
        );
        Ok(image)
    }
}
