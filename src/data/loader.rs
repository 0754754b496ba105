use std::collections::BTreeMap;
use std::path::Path;

use encoding_rs::mem::decode_latin1;
use unicode_normalization::UnicodeNormalization;

use super::model::{
    CellValue, PlayerRecord, PlayerTable, COL_AGE, COL_CLUB, COL_MARKET_VALUE, COL_NAME,
    COL_POSITION, COL_PREDICTED_VALUE,
};
use crate::error::DataLoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the predictions CSV from a file.
///
/// The file is a legacy ISO-8859-1 export: every byte maps straight to the
/// Unicode code point of the same number. Player names are additionally
/// ASCII-folded (see [`ascii_fold`]); all other columns keep their decoded
/// text untouched.
pub fn load_table(path: &Path) -> Result<PlayerTable, DataLoadError> {
    let raw = std::fs::read(path).map_err(|source| DataLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&raw)
}

/// Parse raw ISO-8859-1 CSV bytes into a [`PlayerTable`].
pub fn parse_table(raw: &[u8]) -> Result<PlayerTable, DataLoadError> {
    let text = decode_latin1(raw);
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let fixed = FixedColumns::locate(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        records.push(fixed.parse_row(&headers, &record, row_no)?);
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty);
    }
    Ok(PlayerTable::new(headers, records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Header positions of the six required columns.
struct FixedColumns {
    name: usize,
    position: usize,
    club: usize,
    age: usize,
    market_value: usize,
    predicted_value: usize,
}

impl FixedColumns {
    fn locate(headers: &[String]) -> Result<Self, DataLoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DataLoadError::MissingColumn(column))
        };
        Ok(FixedColumns {
            name: find(COL_NAME)?,
            position: find(COL_POSITION)?,
            club: find(COL_CLUB)?,
            age: find(COL_AGE)?,
            market_value: find(COL_MARKET_VALUE)?,
            predicted_value: find(COL_PREDICTED_VALUE)?,
        })
    }

    fn is_fixed(&self, idx: usize) -> bool {
        idx == self.name
            || idx == self.position
            || idx == self.club
            || idx == self.age
            || idx == self.market_value
            || idx == self.predicted_value
    }

    fn parse_row(
        &self,
        headers: &[String],
        record: &csv::StringRecord,
        row_no: usize,
    ) -> Result<PlayerRecord, DataLoadError> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let age = parse_age(cell(self.age)).ok_or_else(|| DataLoadError::BadCell {
            row: row_no,
            column: COL_AGE,
            value: cell(self.age).to_string(),
        })?;
        let market_value =
            parse_value(cell(self.market_value)).ok_or_else(|| DataLoadError::BadCell {
                row: row_no,
                column: COL_MARKET_VALUE,
                value: cell(self.market_value).to_string(),
            })?;
        let predicted_value =
            parse_value(cell(self.predicted_value)).ok_or_else(|| DataLoadError::BadCell {
                row: row_no,
                column: COL_PREDICTED_VALUE,
                value: cell(self.predicted_value).to_string(),
            })?;

        let mut extra = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if self.is_fixed(idx) {
                continue;
            }
            let Some(column) = headers.get(idx) else {
                continue;
            };
            extra.insert(column.clone(), guess_cell_type(value));
        }

        Ok(PlayerRecord {
            name: ascii_fold(cell(self.name)),
            position: cell(self.position).to_string(),
            club: cell(self.club).to_string(),
            age,
            market_value,
            predicted_value,
            extra,
        })
    }
}

// ---------------------------------------------------------------------------
// Cell parsing helpers
// ---------------------------------------------------------------------------

/// NFKD-decompose and keep only 7-bit ASCII, stripping accents while the
/// base letters survive: `José María` → `Jose Maria`.
fn ascii_fold(name: &str) -> String {
    name.nfkd().filter(|c| c.is_ascii()).collect()
}

fn parse_age(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(age) = s.parse::<i64>() {
        return Some(age);
    }
    // pandas writes `27.0` for integer columns that ever held a NaN
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
}

fn parse_value(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[u8] = b"Name,Position_Cluster_fifa,Club_fifa,Age_fifa,market_value_in_eur,predicted_market_value";

    fn csv_bytes(rows: &[&[u8]]) -> Vec<u8> {
        let mut out = HEADER.to_vec();
        for row in rows {
            out.push(b'\n');
            out.extend_from_slice(row);
        }
        out.push(b'\n');
        out
    }

    #[test]
    fn names_are_ascii_folded_but_other_text_keeps_accents() {
        let table = parse_table(&csv_bytes(&[
            b"Jos\xE9 Mar\xEDa,FWD,M\xE1laga CF,24,1500000,1612500.5",
        ]))
        .unwrap();

        assert_eq!(table.records[0].name, "Jose Maria");
        assert_eq!(table.records[0].club, "M\u{e1}laga CF");
        assert_eq!(table.records[0].age, 24);
        assert_eq!(table.records[0].market_value, 1_500_000.0);
        assert_eq!(table.records[0].predicted_value, 1_612_500.5);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let bytes = b"Name,Position_Cluster_fifa,Age_fifa,market_value_in_eur,predicted_market_value\nA,FWD,20,1,2\n";
        let err = parse_table(bytes).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Club_fifa")));
    }

    #[test]
    fn unusable_cell_reports_row_and_column() {
        let err = parse_table(&csv_bytes(&[b"A,FWD,Ajax,young,1,2"])).unwrap_err();
        match err {
            DataLoadError::BadCell { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, COL_AGE);
                assert_eq!(value, "young");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_rejected() {
        let mut bytes = HEADER.to_vec();
        bytes.push(b'\n');
        assert!(matches!(
            parse_table(&bytes).unwrap_err(),
            DataLoadError::Empty
        ));
    }

    #[test]
    fn pandas_style_float_ages_are_accepted() {
        let table = parse_table(&csv_bytes(&[b"A,FWD,Ajax,27.0,1,2"])).unwrap();
        assert_eq!(table.records[0].age, 27);
    }

    #[test]
    fn extra_columns_are_type_guessed_and_kept_in_header_order() {
        let bytes =
            b"Name,Position_Cluster_fifa,Club_fifa,Age_fifa,market_value_in_eur,predicted_market_value,Goals,Rating,Notes\n\
              A,FWD,Ajax,20,1,2,11,7.4,on loan\n\
              B,MID,Porto,22,3,4,,6.1,\n";
        let table = parse_table(bytes).unwrap();

        assert_eq!(table.columns.len(), 9);
        assert_eq!(table.columns[6], "Goals");
        assert_eq!(table.records[0].extra["Goals"], CellValue::Integer(11));
        assert_eq!(table.records[0].extra["Rating"], CellValue::Float(7.4));
        assert_eq!(
            table.records[0].extra["Notes"],
            CellValue::Text("on loan".into())
        );
        assert_eq!(table.records[1].extra["Goals"], CellValue::Empty);
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let err = load_table(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Read { .. }));
    }
}
