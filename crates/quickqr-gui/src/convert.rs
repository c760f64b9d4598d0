use quickqr_core::client::QrImage;
use quickqr_core::error::Result;

/// Decode an encoded `QrImage` into an egui ColorImage for texture upload.
pub fn qr_image_to_color_image(image: &QrImage) -> Result<egui::ColorImage> {
    let rgba = image.to_rgba()?;
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
