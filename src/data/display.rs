use super::model::{PlayerRecord, PlayerTable, COL_MARKET_VALUE, COL_PREDICTED_VALUE};

// ---------------------------------------------------------------------------
// Display formatting (strings only – the numeric data is never touched)
// ---------------------------------------------------------------------------

/// Columns that render as euro amounts in the table.
pub fn is_currency_column(column: &str) -> bool {
    column == COL_MARKET_VALUE || column == COL_PREDICTED_VALUE
}

/// Format a euro amount with thousands separators and two decimals:
/// `1234567.8` → `€1,234,567.80`.
pub fn format_eur(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }

    let sign = if negative { "-" } else { "" };
    format!("\u{20ac}{sign}{grouped}.{frac_part}")
}

/// Build the visible table: the filtered rows restricted to the selected
/// columns, currency columns through [`format_eur`], everything else in its
/// source form.
pub fn display_rows(
    table: &PlayerTable,
    indices: &[usize],
    columns: &[String],
) -> Vec<Vec<String>> {
    indices
        .iter()
        .map(|&i| {
            let record = &table.records[i];
            columns
                .iter()
                .map(|column| display_cell(record, column))
                .collect()
        })
        .collect()
}

fn display_cell(record: &PlayerRecord, column: &str) -> String {
    let cell = record.field(column);
    if is_currency_column(column) {
        if let Some(v) = cell.as_f64() {
            return format_eur(v);
        }
    }
    cell.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::collections::BTreeMap;

    #[test]
    fn euro_formatting_groups_thousands_and_pads_cents() {
        assert_eq!(format_eur(1234567.8), "€1,234,567.80");
        assert_eq!(format_eur(0.0), "€0.00");
        assert_eq!(format_eur(999.999), "€1,000.00");
        assert_eq!(format_eur(12.0), "€12.00");
        assert_eq!(format_eur(1_000.0), "€1,000.00");
        assert_eq!(format_eur(987_654_321.0), "€987,654,321.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_after_the_euro_symbol() {
        assert_eq!(format_eur(-1234.5), "€-1,234.50");
    }

    fn sample_table() -> PlayerTable {
        let mut extra = BTreeMap::new();
        extra.insert("Goals".to_string(), CellValue::Integer(9));
        PlayerTable::new(
            vec![
                "Name".into(),
                "Position_Cluster_fifa".into(),
                "Club_fifa".into(),
                "Age_fifa".into(),
                "market_value_in_eur".into(),
                "predicted_market_value".into(),
                "Goals".into(),
            ],
            vec![PlayerRecord {
                name: "Jose".into(),
                position: "FWD".into(),
                club: "Malaga CF".into(),
                age: 24,
                market_value: 1_500_000.0,
                predicted_value: 1_612_500.5,
                extra,
            }],
        )
    }

    #[test]
    fn rows_are_restricted_to_the_selected_columns_in_order() {
        let table = sample_table();
        let columns = vec![
            "Name".to_string(),
            "market_value_in_eur".to_string(),
            "Goals".to_string(),
        ];
        let rows = display_rows(&table, &[0], &columns);
        assert_eq!(rows, vec![vec!["Jose", "€1,500,000.00", "9"]]);
    }

    #[test]
    fn both_value_columns_render_as_currency() {
        let table = sample_table();
        let columns = vec![
            "market_value_in_eur".to_string(),
            "predicted_market_value".to_string(),
            "Age_fifa".to_string(),
        ];
        let rows = display_rows(&table, &[0], &columns);
        assert_eq!(rows[0], vec!["€1,500,000.00", "€1,612,500.50", "24"]);
    }

    #[test]
    fn formatting_leaves_the_table_numbers_alone() {
        let table = sample_table();
        let _ = display_rows(&table, &[0], &table.columns);
        assert_eq!(table.records[0].market_value, 1_500_000.0);
        assert_eq!(table.records[0].predicted_value, 1_612_500.5);
    }
}
