use std::io::Cursor;
use std::sync::OnceLock;

use image::{ImageFormat, Rgb, RgbImage};

use crate::client::QrImage;
use crate::consts::{DEFAULT_IMAGE_SIZE, PLACEHOLDER_GRAY};

static PLACEHOLDER_PNG: OnceLock<Vec<u8>> = OnceLock::new();

/// Encoded bytes of the placeholder: a flat gray square shown before the
/// first generation and after any failed one. Stable across calls.
pub fn placeholder_png() -> &'static [u8] {
    PLACEHOLDER_PNG.get_or_init(|| {
        let img = RgbImage::from_pixel(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            Rgb([PLACEHOLDER_GRAY; 3]),
        );
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encoding an in-memory PNG cannot fail");
        bytes
    })
}

pub fn placeholder_image() -> QrImage {
    QrImage {
        bytes: placeholder_png().to_vec(),
        width: DEFAULT_IMAGE_SIZE,
        height: DEFAULT_IMAGE_SIZE,
    }
}
