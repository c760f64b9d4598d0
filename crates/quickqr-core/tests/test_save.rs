mod common;

use image::{Rgba, RgbaImage};
use quickqr_core::save::{PixelSurface, SaveRequest, SaveSource};

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn test_no_source_resolves_to_nothing() {
    let request = SaveRequest::new(None, "qrcode.png");
    assert!(request.resolve().unwrap().is_none());
}

#[test]
fn test_encoded_source_resolves_to_same_bytes() {
    let bytes = common::encoded_png(8, 8, 50);
    let request = SaveRequest::new(Some(SaveSource::Encoded(bytes.clone())), "qrcode.png");
    assert_eq!(request.resolve().unwrap().unwrap(), bytes);
}

#[test]
fn test_surface_source_exports_pixels() {
    let surface = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
    let request = SaveRequest::new(
        Some(SaveSource::Surface(Box::new(surface.clone()))),
        "surface.png",
    );

    let bytes = request.resolve().unwrap().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, surface);
}

#[test]
fn test_surface_export_reflects_content_at_export_time() {
    // Lazy resolution: the request is only built at click time, so pixels
    // drawn after the widget was configured still end up in the export.
    let mut surface = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    surface.put_pixel(1, 1, Rgba([255, 255, 255, 255]));

    let exported = surface.export_png().unwrap();
    let decoded = image::load_from_memory(&exported).unwrap().to_rgba8();
    assert_eq!(*decoded.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[test]
fn test_write_to_uses_requested_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = common::encoded_png(8, 8, 70);
    let request = SaveRequest::new(Some(SaveSource::Encoded(bytes.clone())), "qrcode.png");

    let path = request.write_to(dir.path()).unwrap().unwrap();
    assert_eq!(path.file_name().unwrap(), "qrcode.png");
    assert_eq!(std::fs::read(path).unwrap(), bytes);
}

#[test]
fn test_write_to_without_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let request = SaveRequest::new(None, "qrcode.png");

    assert!(request.write_to(dir.path()).unwrap().is_none());
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
