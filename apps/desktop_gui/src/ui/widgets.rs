//! Small reusable widgets.

use egui::{Color32, CornerRadius, Margin, RichText, Stroke, TextureHandle};

use crate::ui::theme;

/// Returns true when the dismiss button was clicked.
pub fn status_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let mut dismissed = false;
    egui::Frame::new()
        .fill(theme::ERROR_FILL)
        .stroke(Stroke::new(1.0, theme::ERROR_STROKE))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(message).color(Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed = ui.button("Dismiss").clicked();
                });
            });
        });
    dismissed
}

/// Returns true when "Clear filter" was clicked.
pub fn filter_banner(ui: &mut egui::Ui) -> bool {
    let mut cleared = false;
    egui::Frame::new()
        .fill(theme::INFO_FILL)
        .stroke(Stroke::new(1.0, theme::INFO_STROKE))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("You are viewing filtered results!").color(Color32::WHITE));
                cleared = ui.button("Clear filter").clicked();
            });
        });
    cleared
}

/// Draws the shared avatar, or a neutral disc while it is unavailable.
pub fn avatar(ui: &mut egui::Ui, texture: Option<&TextureHandle>, edge: f32) {
    let size = egui::vec2(edge, edge);
    match texture {
        Some(texture) => {
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(size)
                    .corner_radius(CornerRadius::same((edge / 2.0).min(255.0) as u8)),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), edge / 2.0, ui.visuals().widgets.inactive.bg_fill);
        }
    }
}
