use quickqr_core::client::QrImage;
use quickqr_core::placeholder::{placeholder_image, placeholder_png};

#[test]
fn test_placeholder_is_decodable_png() {
    let image = QrImage::from_encoded(placeholder_png().to_vec()).unwrap();
    assert_eq!(image.width, 480);
    assert_eq!(image.height, 480);
}

#[test]
fn test_placeholder_bytes_are_stable() {
    assert_eq!(placeholder_png(), placeholder_png());
    assert_eq!(placeholder_image().bytes, placeholder_png());
}

#[test]
fn test_placeholder_pixels_are_flat_gray() {
    let rgba = placeholder_image().to_rgba().unwrap();
    let first = *rgba.get_pixel(0, 0);
    assert_eq!(first.0[0], first.0[1]);
    assert_eq!(first.0[1], first.0[2]);
    assert!(rgba.pixels().all(|p| *p == first));
}
