use egui::{Color32, Ui};

pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
pub const BACKGROUND: Color32 = Color32::from_gray(36);

pub fn draw_color_option(ui: &mut Ui, name: &str, color: &mut Color32, default: Color32) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.color_edit_button_srgba(color);
        if ui.button("Reset").clicked() {
            *color = default;
        }
    });
}
