use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_IMAGE_SIZE};
use crate::error::{QuickQrError, Result};

/// QR error-correction level, as understood by the generation service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    M,
    #[default]
    Q,
    H,
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EcLevel {
    type Err = QuickQrError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" | "l" => Ok(EcLevel::L),
            "M" | "m" => Ok(EcLevel::M),
            "Q" | "q" => Ok(EcLevel::Q),
            "H" | "h" => Ok(EcLevel::H),
            other => Err(QuickQrError::Config(format!(
                "unknown error-correction level: {other}"
            ))),
        }
    }
}

/// One outbound request to the QR generation service.
///
/// The target text is carried verbatim; no validation or length limit is
/// applied locally. Encoding happens in [`QrRequest::url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrRequest {
    pub endpoint: String,
    pub text: String,
    pub size: u32,
    pub ec_level: EcLevel,
}

impl QrRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            text: text.into(),
            size: DEFAULT_IMAGE_SIZE,
            ec_level: EcLevel::default(),
        }
    }

    /// Full request URL with the target text percent-encoded into the
    /// `text` query parameter.
    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("text", &self.text)
            .append_pair("size", &self.size.to_string())
            .append_pair("ecLevel", &self.ec_level.to_string());
        Ok(url)
    }
}
