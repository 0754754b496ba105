use super::aggregate::{age_distribution, average_age_by_club, market_value_by_position};
use super::display::display_rows;
use super::filter::{filtered_indices, FilterCriteria};
use super::model::PlayerTable;

// ---------------------------------------------------------------------------
// DashboardView – everything one render needs, derived in a single pass
// ---------------------------------------------------------------------------

/// The derived state behind the whole dashboard: filtered indices, the
/// formatted table restricted to the selected columns, and the three chart
/// series. Rebuilt from scratch on every widget change and rendered from
/// cache in between.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Indices into the table's records that pass the current criteria.
    pub matching: Vec<usize>,
    /// Columns shown in the table, in source-header order.
    pub columns: Vec<String>,
    /// Formatted cells, one row per matching record.
    pub rows: Vec<Vec<String>>,
    /// Mean market value per position (appearance order).
    pub value_by_position: Vec<(String, f64)>,
    /// Mean age per club (descending by mean).
    pub age_by_club: Vec<(String, f64)>,
    /// Player count per age (ascending).
    pub age_distribution: Vec<(i64, usize)>,
}

impl DashboardView {
    /// Number of players passing the filters.
    pub fn row_count(&self) -> usize {
        self.matching.len()
    }
}

/// The one request/response function the UI shell calls: criteria and column
/// selection in, a complete view out. Pure: the table is never touched.
pub fn render_state(
    table: &PlayerTable,
    criteria: &FilterCriteria,
    columns: &[String],
) -> DashboardView {
    let matching = filtered_indices(table, criteria);
    DashboardView {
        columns: columns.to_vec(),
        rows: display_rows(table, &matching, columns),
        value_by_position: market_value_by_position(table, &matching),
        age_by_club: average_age_by_club(table, &matching),
        age_distribution: age_distribution(table, &matching),
        matching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PlayerRecord, REQUIRED_COLUMNS};
    use std::collections::BTreeMap;

    fn squad() -> PlayerTable {
        let record = |name: &str, position: &str, club: &str, age: i64, value: f64| PlayerRecord {
            name: name.to_string(),
            position: position.to_string(),
            club: club.to_string(),
            age,
            market_value: value,
            predicted_value: value,
            extra: BTreeMap::new(),
        };
        PlayerTable::new(
            REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                record("Ana", "FWD", "Ajax", 21, 4_000_000.0),
                record("Bo", "FWD", "Porto", 21, 2_000_000.0),
                record("Cy", "MID", "Ajax", 30, 1_000_000.0),
            ],
        )
    }

    #[test]
    fn view_is_consistent_across_table_and_charts() {
        let table = squad();
        let mut criteria = FilterCriteria::unrestricted(&table);
        criteria.positions.insert("FWD".to_string());

        let columns = vec!["Name".to_string(), "market_value_in_eur".to_string()];
        let view = render_state(&table, &criteria, &columns);

        assert_eq!(view.matching, vec![0, 1]);
        assert_eq!(view.row_count(), 2);
        assert_eq!(
            view.rows,
            vec![
                vec!["Ana".to_string(), "€4,000,000.00".to_string()],
                vec!["Bo".to_string(), "€2,000,000.00".to_string()],
            ]
        );
        assert_eq!(
            view.value_by_position,
            vec![("FWD".to_string(), 3_000_000.0)]
        );
        // Ajax's mean age must ignore the filtered-out MID row.
        assert_eq!(
            view.age_by_club,
            vec![("Ajax".to_string(), 21.0), ("Porto".to_string(), 21.0)]
        );
        assert_eq!(view.age_distribution, vec![(21, 2)]);
    }

    #[test]
    fn empty_column_selection_yields_empty_rows_but_live_charts() {
        let table = squad();
        let criteria = FilterCriteria::unrestricted(&table);
        let view = render_state(&table, &criteria, &[]);

        assert_eq!(view.row_count(), 3);
        assert!(view.columns.is_empty());
        assert!(view.rows.iter().all(|row| row.is_empty()));
        assert_eq!(view.value_by_position.len(), 2);
        assert_eq!(view.age_distribution, vec![(21, 2), (30, 1)]);
    }
}
