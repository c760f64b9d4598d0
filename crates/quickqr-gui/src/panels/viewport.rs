use crate::app::QuickQrApp;

pub fn show(ctx: &egui::Context, app: &mut QuickQrApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let img_rect = compute_img_rect(rect, egui::vec2(tex_size[0], tex_size[1]));
            draw_image(ui, texture_id, img_rect);
            draw_viewing_label(ui, rect, &app.viewport.viewing_label);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Center the image; shrink to fit when the panel is smaller than the
/// image, never upscale.
fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let available = rect.size();
    let fit = (available.x / image_size.x)
        .min(available.y / image_size.y)
        .min(1.0);
    egui::Rect::from_center_size(rect.center(), image_size * fit)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}
