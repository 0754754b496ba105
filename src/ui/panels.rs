use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::display::format_eur;
use crate::state::{AppState, ExportStatus};
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: title plus the loaded/matching counters.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Football Player Analysis");
        ui.separator();
        ui.label(format!(
            "{} players loaded, {} match filters",
            state.table.len(),
            state.view.row_count()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter sidebar. Any change refreshes the cached view, either
/// inside the state mutators (checkbox groups) or at the end of this pass
/// (range sliders).
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            position_group(ui, state);
            club_group(ui, state);

            ui.add_space(6.0);
            let mut ranges_changed = age_range_controls(ui, state);
            ranges_changed |= value_range_controls(ui, state);
            if ranges_changed {
                state.refresh_view();
            }

            ui.add_space(6.0);
            ui.separator();
            column_group(ui, state);

            ui.add_space(6.0);
            ui.separator();
            download_section(ui, state);

            ui.add_space(6.0);
            ui.separator();
            ui.strong("About");
            ui.small("This app allows you to filter\nand explore football player data.");
        });
}

/// Position multi-select. An empty selection means "no restriction".
fn position_group(ui: &mut Ui, state: &mut AppState) {
    let values: Vec<String> = state.table.positions.iter().cloned().collect();
    let header = group_header("Position", state.criteria.positions.len(), values.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("position_filter")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_positions();
                }
                if ui.small_button("None").clicked() {
                    state.clear_positions();
                }
            });
            for value in &values {
                let mut checked = state.criteria.positions.contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    state.toggle_position(value);
                }
            }
        });
}

/// Club multi-select, same semantics as the position group.
fn club_group(ui: &mut Ui, state: &mut AppState) {
    let values: Vec<String> = state.table.clubs.iter().cloned().collect();
    let header = group_header("Club", state.criteria.clubs.len(), values.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("club_filter")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_clubs();
                }
                if ui.small_button("None").clicked() {
                    state.clear_clubs();
                }
            });
            for value in &values {
                let mut checked = state.criteria.clubs.contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    state.toggle_club(value);
                }
            }
        });
}

/// Inclusive age bounds over the observed span. Returns whether either
/// slider moved; min ≤ max is re-established here.
fn age_range_controls(ui: &mut Ui, state: &mut AppState) -> bool {
    ui.strong("Age Range");
    let span = state.table.age_span;
    let low = ui.add(
        egui::Slider::new(&mut state.criteria.age_range.0, span.0..=span.1).text("min"),
    );
    let high = ui.add(
        egui::Slider::new(&mut state.criteria.age_range.1, span.0..=span.1).text("max"),
    );

    if low.changed() && state.criteria.age_range.1 < state.criteria.age_range.0 {
        state.criteria.age_range.1 = state.criteria.age_range.0;
    }
    if high.changed() && state.criteria.age_range.0 > state.criteria.age_range.1 {
        state.criteria.age_range.0 = state.criteria.age_range.1;
    }
    low.changed() || high.changed()
}

/// Inclusive market-value bounds from the table floor up to the observed
/// max. Logarithmic: valuations span several orders of magnitude.
fn value_range_controls(ui: &mut Ui, state: &mut AppState) -> bool {
    ui.add_space(6.0);
    ui.strong("Market Value Range");
    let span = state.table.value_span;
    let low = ui.add(
        egui::Slider::new(&mut state.criteria.value_range.0, span.0..=span.1)
            .logarithmic(true)
            .custom_formatter(|v, _| format_eur(v))
            .text("min"),
    );
    let high = ui.add(
        egui::Slider::new(&mut state.criteria.value_range.1, span.0..=span.1)
            .logarithmic(true)
            .custom_formatter(|v, _| format_eur(v))
            .text("max"),
    );

    if low.changed() && state.criteria.value_range.1 < state.criteria.value_range.0 {
        state.criteria.value_range.1 = state.criteria.value_range.0;
    }
    if high.changed() && state.criteria.value_range.0 > state.criteria.value_range.1 {
        state.criteria.value_range.0 = state.criteria.value_range.1;
    }
    low.changed() || high.changed()
}

/// Which columns the table shows. Unticking everything hides the table but
/// leaves the charts alive.
fn column_group(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Columns to Display");
    let values = state.table.columns.clone();
    let header = if state.selected_columns.is_empty() {
        "Columns  (none)".to_string()
    } else {
        format!(
            "Columns  ({}/{})",
            state.selected_columns.len(),
            values.len()
        )
    };

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("column_picker")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_columns();
                }
                if ui.small_button("None").clicked() {
                    state.clear_columns();
                }
            });
            for value in &values {
                let mut checked = state.selected_columns.contains(value);
                if ui.checkbox(&mut checked, value).changed() {
                    state.toggle_column(value);
                }
            }
        });
}

/// Export button plus the outcome of the last attempt.
fn download_section(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Download Options");
    if ui.button("Download Filtered Data as CSV").clicked() {
        state.export_filtered();
    }
    match &state.export_status {
        Some(ExportStatus::Saved(msg)) => {
            ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
        }
        Some(ExportStatus::Failed(msg)) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {}
    }
}

/// `Position  (any)` when nothing is ticked, `Position  (2/4)` otherwise.
fn group_header(name: &str, selected: usize, total: usize) -> String {
    if selected == 0 {
        format!("{name}  (any)")
    } else {
        format!("{name}  ({selected}/{total})")
    }
}

// ---------------------------------------------------------------------------
// Central panel – table and charts
// ---------------------------------------------------------------------------

/// Render the main content: counters, the formatted table, and the three
/// aggregate charts, all read from the cached view.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Filtered Player Database");
            ui.label(format!("Total Players Found: {}", state.view.row_count()));
            ui.add_space(4.0);
            table::player_table(ui, &state.view);

            ui.add_space(12.0);
            ui.separator();
            ui.heading("Visualizations");

            ui.add_space(4.0);
            ui.strong("Market Value Distribution by Position");
            charts::market_value_by_position(ui, &state.view);

            ui.add_space(12.0);
            ui.strong("Average Age by Club");
            charts::average_age_by_club(ui, &state.view);

            ui.add_space(12.0);
            ui.strong("Distribution of Player Ages");
            charts::age_distribution(ui, &state.view);
        });
}
