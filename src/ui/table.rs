use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::view::DashboardView;

const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 18.0;
/// The table scrolls internally past this height so the charts below stay
/// reachable.
const MAX_TABLE_HEIGHT: f32 = 360.0;

/// Render the filtered records as a striped, resizable grid. Column order
/// and cell text come pre-formatted from the view.
pub fn player_table(ui: &mut Ui, view: &DashboardView) {
    if view.columns.is_empty() {
        ui.label("No columns selected.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(
            Column::auto().at_least(60.0).clip(true),
            view.columns.len(),
        )
        .min_scrolled_height(0.0)
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .header(HEADER_HEIGHT, |mut header| {
            for column in &view.columns {
                header.col(|ui| {
                    ui.strong(column);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                let cells = &view.rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
