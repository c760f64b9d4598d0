use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_IMAGE_SIZE, DEFAULT_SAVE_NAME};
use crate::error::{QuickQrError, Result};
use crate::request::{EcLevel, QrRequest};

/// User-adjustable fetch parameters, serialized as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub size: u32,
    pub ec_level: EcLevel,
    pub save_name: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            size: DEFAULT_IMAGE_SIZE,
            ec_level: EcLevel::default(),
            save_name: DEFAULT_SAVE_NAME.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| QuickQrError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| QuickQrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Request for the given target text under this config.
    pub fn request_for(&self, text: impl Into<String>) -> QrRequest {
        QrRequest {
            endpoint: self.endpoint.clone(),
            text: text.into(),
            size: self.size,
            ec_level: self.ec_level,
        }
    }
}
