mod common;

use quickqr_core::client::QrImage;
use quickqr_core::error::QuickQrError;

#[test]
fn test_from_encoded_validates_and_measures() {
    let bytes = common::encoded_png(32, 16, 0);
    let image = QrImage::from_encoded(bytes.clone()).unwrap();
    assert_eq!(image.width, 32);
    assert_eq!(image.height, 16);
    assert_eq!(image.bytes, bytes);
}

#[test]
fn test_from_encoded_rejects_non_image_body() {
    // A service error page served with a 200 must still fail decoding.
    let err = QrImage::from_encoded(b"<html>oops</html>".to_vec()).unwrap_err();
    assert!(matches!(err, QuickQrError::Decode(_)));
}

#[test]
fn test_to_rgba_roundtrips_dimensions() {
    let image = common::qr_image(24, 24, 128);
    let rgba = image.to_rgba().unwrap();
    assert_eq!(rgba.dimensions(), (24, 24));
}
