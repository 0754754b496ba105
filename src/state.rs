use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::export::export_csv;
use crate::data::filter::FilterCriteria;
use crate::data::model::PlayerTable;
use crate::data::view::{render_state, DashboardView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Outcome of the latest export action, shown next to the button.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Saved(String),
    Failed(String),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; immutable for the whole session.
    pub table: PlayerTable,
    /// Current sidebar filter selection.
    pub criteria: FilterCriteria,
    /// Columns ticked for display (subset of `table.columns`).
    pub selected_columns: BTreeSet<String>,
    /// Derived view backing the table and the charts (cached).
    pub view: DashboardView,
    /// Where the export button writes to.
    pub export_path: PathBuf,
    /// Outcome of the latest export, if any.
    pub export_status: Option<ExportStatus>,
}

impl AppState {
    /// Start a session: no filters, every column visible.
    pub fn new(table: PlayerTable, export_path: PathBuf) -> Self {
        let criteria = FilterCriteria::unrestricted(&table);
        let selected_columns: BTreeSet<String> = table.columns.iter().cloned().collect();
        let mut state = AppState {
            table,
            criteria,
            selected_columns,
            view: DashboardView::default(),
            export_path,
            export_status: None,
        };
        state.refresh_view();
        state
    }

    /// The ticked columns, restored to source-header order.
    pub fn display_columns(&self) -> Vec<String> {
        self.table
            .columns
            .iter()
            .filter(|c| self.selected_columns.contains(*c))
            .cloned()
            .collect()
    }

    /// Recompute the cached view. Call after any widget change.
    pub fn refresh_view(&mut self) {
        let columns = self.display_columns();
        self.view = render_state(&self.table, &self.criteria, &columns);
        log::debug!(
            "view refreshed: {} of {} players match",
            self.view.row_count(),
            self.table.len()
        );
    }

    /// Toggle one position in the allowed set (empty set = no restriction).
    pub fn toggle_position(&mut self, position: &str) {
        toggle(&mut self.criteria.positions, position);
        self.refresh_view();
    }

    /// Toggle one club in the allowed set (empty set = no restriction).
    pub fn toggle_club(&mut self, club: &str) {
        toggle(&mut self.criteria.clubs, club);
        self.refresh_view();
    }

    /// Toggle a column in the display selection.
    pub fn toggle_column(&mut self, column: &str) {
        toggle(&mut self.selected_columns, column);
        self.refresh_view();
    }

    pub fn select_all_positions(&mut self) {
        self.criteria.positions = self.table.positions.clone();
        self.refresh_view();
    }

    pub fn clear_positions(&mut self) {
        self.criteria.positions.clear();
        self.refresh_view();
    }

    pub fn select_all_clubs(&mut self) {
        self.criteria.clubs = self.table.clubs.clone();
        self.refresh_view();
    }

    pub fn clear_clubs(&mut self) {
        self.criteria.clubs.clear();
        self.refresh_view();
    }

    pub fn select_all_columns(&mut self) {
        self.selected_columns = self.table.columns.iter().cloned().collect();
        self.refresh_view();
    }

    pub fn clear_columns(&mut self) {
        self.selected_columns.clear();
        self.refresh_view();
    }

    /// Write the current filtered view to `export_path` and record the
    /// outcome for the sidebar. Failures leave the session untouched.
    pub fn export_filtered(&mut self) {
        match export_csv(&self.table, &self.view.matching, &self.export_path) {
            Ok(rows) => {
                log::info!(
                    "exported {rows} filtered players to {}",
                    self.export_path.display()
                );
                self.export_status = Some(ExportStatus::Saved(format!(
                    "Saved {rows} players to {}",
                    self.export_path.display()
                )));
            }
            Err(e) => {
                log::error!("export failed: {e}");
                self.export_status = Some(ExportStatus::Failed(format!("Export failed: {e}")));
            }
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_table;

    fn sample_state() -> AppState {
        let table = parse_table(
            b"Name,Position_Cluster_fifa,Club_fifa,Age_fifa,market_value_in_eur,predicted_market_value\n\
              Ana,FWD,Ajax,21,4000000,4100000\n\
              Bo,FWD,Porto,23,2000000,2200000\n\
              Cy,MID,Ajax,30,1000000,900000\n",
        )
        .unwrap();
        AppState::new(table, PathBuf::from("filtered_players.csv"))
    }

    #[test]
    fn fresh_session_shows_everything() {
        let state = sample_state();
        assert_eq!(state.view.row_count(), 3);
        assert_eq!(state.display_columns(), state.table.columns);
        assert!(state.export_status.is_none());
    }

    #[test]
    fn toggling_a_position_refreshes_the_cached_view() {
        let mut state = sample_state();
        state.toggle_position("MID");
        assert_eq!(state.view.row_count(), 1);
        // Toggling it back returns to the unrestricted view.
        state.toggle_position("MID");
        assert_eq!(state.view.row_count(), 3);
    }

    #[test]
    fn column_selection_keeps_header_order() {
        let mut state = sample_state();
        state.clear_columns();
        state.toggle_column("Age_fifa");
        state.toggle_column("Name");
        // Ticked out of order, displayed in header order.
        assert_eq!(state.display_columns(), vec!["Name", "Age_fifa"]);
        assert_eq!(state.view.rows[0], vec!["Ana", "21"]);
    }

    #[test]
    fn export_records_a_success_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = sample_state();
        state.export_path = dir.path().join("out.csv");
        state.toggle_position("FWD");

        state.export_filtered();
        match &state.export_status {
            Some(ExportStatus::Saved(msg)) => assert!(msg.starts_with("Saved 2 players")),
            other => panic!("unexpected status: {other:?}"),
        }
        assert!(state.export_path.exists());
    }

    #[test]
    fn export_failure_is_reported_and_state_survives() {
        let mut state = sample_state();
        state.export_path = PathBuf::from("no_such_dir/out.csv");
        state.export_filtered();
        assert!(matches!(state.export_status, Some(ExportStatus::Failed(_))));
        assert_eq!(state.view.row_count(), 3);
    }
}
