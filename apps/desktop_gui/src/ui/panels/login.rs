//! Credential gate screen.

use client_core::CredentialGate;
use egui::{CornerRadius, Margin, RichText, Stroke};

use crate::controller::reducer::{StatusBanner, UiAction};
use crate::ui::{theme, widgets};

pub fn show_login_screen(
    ctx: &egui::Context,
    gate: &CredentialGate,
    banner: Option<&StatusBanner>,
    focus_username: bool,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let avail = ui.available_size();
        let card_width = avail.x.clamp(320.0, 420.0);
        ui.add_space((avail.y * 0.18).clamp(18.0, 140.0));

        ui.vertical_centered(|ui| {
            ui.set_width(card_width);

            if let Some(banner) = banner {
                if widgets::status_banner(ui, &banner.message) {
                    actions.push(UiAction::DismissBanner);
                }
                ui.add_space(8.0);
            }

            egui::Frame::new()
                .fill(theme::lighten_color(ui.visuals().panel_fill, 0.06))
                .corner_radius(CornerRadius::same(14))
                .stroke(Stroke::new(
                    1.0,
                    ui.visuals().widgets.noninteractive.bg_stroke.color,
                ))
                .inner_margin(Margin::symmetric(20, 18))
                .show(ui, |ui| {
                    ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
                    ui.heading("Login");

                    let mut username = gate.username.clone();
                    let username_resp = login_text_field(
                        ui,
                        "login_username",
                        "Username",
                        &mut username,
                        false,
                    );
                    if focus_username {
                        username_resp.request_focus();
                    }
                    if username_resp.changed() {
                        actions.push(UiAction::UsernameEdited(username));
                    }

                    let mut password = gate.password.clone();
                    let password_resp =
                        login_text_field(ui, "login_password", "Password", &mut password, true);
                    if password_resp.changed() {
                        actions.push(UiAction::PasswordEdited(password));
                    }

                    if gate.show_error() {
                        ui.label(RichText::new("Invalid Credentials!").color(theme::ERROR_TEXT));
                    }

                    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let submitted_by_enter = enter_pressed
                        && (username_resp.lost_focus() || password_resp.lost_focus());

                    let button = egui::Button::new(RichText::new("Log In").strong().size(16.0))
                        .fill(theme::ACCENT)
                        .min_size(egui::vec2(ui.available_width(), 38.0));
                    if ui.add(button).clicked() || submitted_by_enter {
                        actions.push(UiAction::SubmitLogin);
                    }
                });
        });
    });

    actions
}

fn login_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    hint: &str,
    value: &mut String,
    masked: bool,
) -> egui::Response {
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(hint)
        .password(masked)
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 32.0], edit)
}
