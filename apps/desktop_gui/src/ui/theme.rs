//! Visuals shared by the login and data panels.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(88, 101, 242);
pub const ERROR_FILL: Color32 = Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(175, 96, 96);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(237, 66, 69);
pub const INFO_FILL: Color32 = Color32::from_rgb(44, 62, 90);
pub const INFO_STROKE: Color32 = Color32::from_rgb(86, 120, 170);

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |channel: u8| -> u8 {
        let channel = f32::from(channel);
        (channel + (255.0 - channel) * t).round() as u8
    };
    Color32::from_rgb(lerp(c.r()), lerp(c.g()), lerp(c.b()))
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(30, 31, 34);
    visuals.window_fill = Color32::from_rgb(43, 45, 49);
    visuals.extreme_bg_color = Color32::from_rgb(24, 25, 28);
    visuals.faint_bg_color = Color32::from_rgb(43, 45, 49);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_moves_toward_white() {
        let base = Color32::from_rgb(100, 0, 255);

        assert_eq!(lighten_color(base, 0.0), base);
        assert_eq!(lighten_color(base, 1.0), Color32::WHITE);
        assert_eq!(lighten_color(base, 0.5), Color32::from_rgb(178, 128, 255));
    }
}
