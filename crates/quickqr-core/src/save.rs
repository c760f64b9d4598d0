use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::Result;

/// A drawable surface that can export its current pixels as an encoded
/// image. Exported at save time, so the latest content wins.
pub trait PixelSurface {
    fn export_png(&self) -> Result<Vec<u8>>;
}

impl PixelSurface for image::RgbaImage {
    fn export_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// What a save action writes: either bytes that are already encoded, or
/// a surface whose pixels are exported on resolution.
pub enum SaveSource {
    Encoded(Vec<u8>),
    Surface(Box<dyn PixelSurface>),
}

/// One save action: a source paired with the filename to save under.
///
/// Built at the moment of the save trigger, not ahead of it. A request
/// with no source is a silent no-op rather than an error.
pub struct SaveRequest {
    pub source: Option<SaveSource>,
    pub file_name: String,
}

impl SaveRequest {
    pub fn new(source: Option<SaveSource>, file_name: impl Into<String>) -> Self {
        Self {
            source,
            file_name: file_name.into(),
        }
    }

    /// Resolve the source to encoded bytes. `None` when no source is
    /// configured.
    pub fn resolve(&self) -> Result<Option<Vec<u8>>> {
        match &self.source {
            None => Ok(None),
            Some(SaveSource::Encoded(bytes)) => Ok(Some(bytes.clone())),
            Some(SaveSource::Surface(surface)) => surface.export_png().map(Some),
        }
    }

    /// Write the resolved bytes to `<dir>/<file_name>`. Returns the path
    /// written, or `None` when there was nothing to save.
    pub fn write_to(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(bytes) = self.resolve()? else {
            return Ok(None);
        };
        let path = dir.join(&self.file_name);
        std::fs::write(&path, bytes)?;
        Ok(Some(path))
    }
}
