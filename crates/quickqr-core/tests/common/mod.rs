use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

/// Encode a flat-colored PNG for use as a fake fetched body.
#[allow(dead_code)]
pub fn encoded_png(width: u32, height: u32, gray: u8) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([gray; 3]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// A `QrImage` wrapping `encoded_png` output.
#[allow(dead_code)]
pub fn qr_image(width: u32, height: u32, gray: u8) -> quickqr_core::client::QrImage {
    quickqr_core::client::QrImage::from_encoded(encoded_png(width, height, gray)).unwrap()
}
