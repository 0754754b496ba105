use std::collections::BTreeSet;

use super::model::{PlayerRecord, PlayerTable};

// ---------------------------------------------------------------------------
// Filter criteria: the four sidebar predicates
// ---------------------------------------------------------------------------

/// The current filter selection, rebuilt from widget state on every change.
///
/// An empty position/club set means "no restriction" rather than "match
/// nothing"; both ranges are inclusive on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub positions: BTreeSet<String>,
    pub clubs: BTreeSet<String>,
    pub age_range: (i64, i64),
    pub value_range: (f64, f64),
}

impl FilterCriteria {
    /// The default selection: nothing restricted, ranges spanning the whole
    /// table (the market-value lower bound sits at the table's floor).
    pub fn unrestricted(table: &PlayerTable) -> Self {
        FilterCriteria {
            positions: BTreeSet::new(),
            clubs: BTreeSet::new(),
            age_range: table.age_span,
            value_range: table.value_span,
        }
    }

    /// Whether a single record passes all four predicates.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        (self.positions.is_empty() || self.positions.contains(&record.position))
            && (self.clubs.is_empty() || self.clubs.contains(&record.club))
            && record.age >= self.age_range.0
            && record.age <= self.age_range.1
            && record.market_value >= self.value_range.0
            && record.market_value <= self.value_range.1
    }
}

/// Return indices of records that pass the criteria, in table order.
///
/// Pure read-only projection: rows are neither cloned nor mutated here, and
/// the result is always a subset of `0..table.len()`.
pub fn filtered_indices(table: &PlayerTable, criteria: &FilterCriteria) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(i, _)| i)
        .collect()
}
