//! Data view: navbar, search, sort controls, and the table/card listing.

use egui::{CornerRadius, Margin, RichText, Stroke, TextureHandle};
use shared::domain::{Record, SortColumn};

use crate::controller::reducer::{DataViewModel, StatusBanner, UiAction};
use crate::ui::{theme, widgets};

const CARD_WIDTH: f32 = 210.0;
const CARD_AVATAR_EDGE: f32 = 72.0;

pub fn show_data_view(
    ctx: &egui::Context,
    data_view: &DataViewModel,
    avatar: Option<&TextureHandle>,
    banner: Option<&StatusBanner>,
) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let rows = data_view.rows();

    egui::TopBottomPanel::top("navbar")
        .exact_height(44.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new("Records Desk").strong().size(18.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "{} of {} records",
                        rows.len(),
                        data_view.records.len()
                    ));
                });
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(banner) = banner {
            if widgets::status_banner(ui, &banner.message) {
                actions.push(UiAction::DismissBanner);
            }
            ui.add_space(6.0);
        }

        ui.heading("Fetched Data");
        ui.add_space(6.0);

        let mut query = data_view.view.search_query().to_string();
        let search = egui::TextEdit::singleline(&mut query)
            .id_salt("records_search")
            .hint_text("Search by name")
            .desired_width(320.0);
        if ui.add(search).changed() {
            actions.push(UiAction::SearchEdited(query));
        }

        if data_view.view.is_filtered() && widgets::filter_banner(ui) {
            actions.push(UiAction::ClearFilter);
        }

        ui.horizontal(|ui| {
            if ui.button("Sort By Name").clicked() {
                actions.push(UiAction::SortBy(SortColumn::Name));
            }
            if ui.button("Sort By Age").clicked() {
                actions.push(UiAction::SortBy(SortColumn::Age));
            }
            let toggle_label = if data_view.view.is_card_view() {
                "Table View"
            } else {
                "Card View"
            };
            if ui.button(toggle_label).clicked() {
                actions.push(UiAction::ToggleView);
            }
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if data_view.view.is_card_view() {
                    show_cards(ui, &rows, avatar);
                } else {
                    show_table(ui, data_view, &rows, &mut actions);
                }
            });
    });

    actions
}

fn show_table(
    ui: &mut egui::Ui,
    data_view: &DataViewModel,
    rows: &[&Record],
    actions: &mut Vec<UiAction>,
) {
    egui::Grid::new("records_table")
        .num_columns(3)
        .striped(true)
        .min_col_width(140.0)
        .spacing(egui::vec2(24.0, 8.0))
        .show(ui, |ui| {
            for column in [SortColumn::Name, SortColumn::Age] {
                let mut title = column.label().to_string();
                if data_view.view.sort_column() == Some(column) {
                    title.push(' ');
                    title.push_str(data_view.view.sort_order().arrow());
                }
                let header = ui.add(
                    egui::Label::new(RichText::new(title).strong()).sense(egui::Sense::click()),
                );
                if header.clicked() {
                    actions.push(UiAction::SortBy(column));
                }
            }
            ui.label(RichText::new("Occupation").strong());
            ui.end_row();

            for record in rows {
                ui.label(record.name.as_str());
                ui.label(record.display_age());
                ui.label(record.occupation.as_str());
                ui.end_row();
            }
        });
}

fn show_cards(ui: &mut egui::Ui, rows: &[&Record], avatar: Option<&TextureHandle>) {
    let card_fill = theme::lighten_color(ui.visuals().panel_fill, 0.05);
    let card_stroke = ui.visuals().widgets.noninteractive.bg_stroke.color;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for record in rows {
            egui::Frame::new()
                .fill(card_fill)
                .stroke(Stroke::new(1.0, card_stroke))
                .corner_radius(CornerRadius::same(10))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical_centered(|ui| {
                        widgets::avatar(ui, avatar, CARD_AVATAR_EDGE);
                        ui.label(RichText::new(&record.name).strong().size(16.0));
                        ui.label(format!("Age: {}", record.display_age()));
                        ui.label(format!("Occupation: {}", record.occupation));
                    });
                });
        }
    });
}
