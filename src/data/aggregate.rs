use std::collections::BTreeMap;

use super::model::PlayerTable;

// ---------------------------------------------------------------------------
// Chart aggregations over the filtered view
// ---------------------------------------------------------------------------
//
// All three run over the *filtered* index set, never the full table, so a
// group that lost every row simply produces no entry.

/// Mean market value per position, groups in first-appearance order.
pub fn market_value_by_position(table: &PlayerTable, indices: &[usize]) -> Vec<(String, f64)> {
    // A handful of position clusters at most; a linear scan beats a map here.
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for &i in indices {
        let record = &table.records[i];
        match groups.iter_mut().find(|(pos, _, _)| *pos == record.position) {
            Some((_, sum, n)) => {
                *sum += record.market_value;
                *n += 1;
            }
            None => groups.push((record.position.clone(), record.market_value, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(pos, sum, n)| (pos, sum / n as f64))
        .collect()
}

/// Mean age per club, sorted descending by the mean (ties alphabetical).
pub fn average_age_by_club(table: &PlayerTable, indices: &[usize]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
    for &i in indices {
        let record = &table.records[i];
        let entry = sums.entry(record.club.as_str()).or_insert((0, 0));
        entry.0 += record.age;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(club, (sum, n))| (club.to_string(), sum as f64 / n as f64))
        .collect();
    // Stable sort on a BTreeMap walk keeps ties alphabetical.
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}

/// Player count per distinct age, ascending by age.
pub fn age_distribution(table: &PlayerTable, indices: &[usize]) -> Vec<(i64, usize)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(table.records[i].age).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PlayerRecord;
    use std::collections::BTreeMap;

    fn record(position: &str, club: &str, age: i64, value: f64) -> PlayerRecord {
        PlayerRecord {
            name: String::new(),
            position: position.to_string(),
            club: club.to_string(),
            age,
            market_value: value,
            predicted_value: value,
            extra: BTreeMap::new(),
        }
    }

    fn table(records: Vec<PlayerRecord>) -> PlayerTable {
        PlayerTable::new(vec!["Name".into()], records)
    }

    fn all(table: &PlayerTable) -> Vec<usize> {
        (0..table.len()).collect()
    }

    #[test]
    fn position_means_in_first_appearance_order() {
        let t = table(vec![
            record("FWD", "A", 20, 10.0),
            record("FWD", "B", 21, 20.0),
            record("MID", "C", 22, 5.0),
        ]);
        assert_eq!(
            market_value_by_position(&t, &all(&t)),
            vec![("FWD".to_string(), 15.0), ("MID".to_string(), 5.0)]
        );
    }

    #[test]
    fn appearance_order_follows_the_filtered_rows_not_the_table() {
        let t = table(vec![
            record("MID", "A", 20, 4.0),
            record("FWD", "B", 21, 8.0),
        ]);
        // Filtered view visits the forward first.
        assert_eq!(
            market_value_by_position(&t, &[1, 0]),
            vec![("FWD".to_string(), 8.0), ("MID".to_string(), 4.0)]
        );
    }

    #[test]
    fn club_means_sort_descending_with_alphabetical_ties() {
        let t = table(vec![
            record("FWD", "Ajax", 20, 1.0),
            record("FWD", "Ajax", 30, 1.0),
            record("MID", "Porto", 31, 1.0),
            record("DEF", "Brugge", 19, 1.0),
            record("DEF", "Lille", 25, 1.0),
        ]);
        assert_eq!(
            average_age_by_club(&t, &all(&t)),
            vec![
                ("Porto".to_string(), 31.0),
                ("Ajax".to_string(), 25.0),
                ("Lille".to_string(), 25.0),
                ("Brugge".to_string(), 19.0),
            ]
        );
    }

    #[test]
    fn age_histogram_ascends_by_age() {
        let t = table(vec![
            record("FWD", "A", 22, 1.0),
            record("FWD", "B", 21, 1.0),
            record("MID", "C", 21, 1.0),
        ]);
        assert_eq!(age_distribution(&t, &all(&t)), vec![(21, 2), (22, 1)]);
    }

    #[test]
    fn aggregations_respect_the_filtered_subset() {
        let t = table(vec![
            record("FWD", "A", 20, 100.0),
            record("FWD", "A", 40, 900.0),
        ]);
        // Only the first row survives filtering.
        assert_eq!(
            market_value_by_position(&t, &[0]),
            vec![("FWD".to_string(), 100.0)]
        );
        assert_eq!(average_age_by_club(&t, &[0]), vec![("A".to_string(), 20.0)]);
        assert_eq!(age_distribution(&t, &[0]), vec![(20, 1)]);
    }

    #[test]
    fn empty_view_yields_empty_aggregates() {
        let t = table(vec![record("FWD", "A", 20, 1.0)]);
        assert!(market_value_by_position(&t, &[]).is_empty());
        assert!(average_age_by_club(&t, &[]).is_empty());
        assert!(age_distribution(&t, &[]).is_empty());
    }
}
