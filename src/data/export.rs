use std::path::Path;

use encoding_rs::mem::{encode_latin1_lossy, is_str_latin1};

use super::model::PlayerTable;
use crate::error::ExportError;

// ---------------------------------------------------------------------------
// Filtered-view snapshot
// ---------------------------------------------------------------------------

/// Write the filtered rows to `path`, overwriting any previous export.
///
/// Every table column is written in header order; the on-screen column
/// selection does not apply. No index column. Fields are encoded in the
/// same ISO-8859-1 as the input, so reloading the export yields the
/// identical row set. Returns the number of data rows written.
pub fn export_csv(
    table: &PlayerTable,
    indices: &[usize],
    path: &Path,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.columns.iter().map(|c| encode_field(c)))?;
    for &i in indices {
        let record = &table.records[i];
        writer.write_record(
            table
                .columns
                .iter()
                .map(|column| encode_field(&record.field(column).to_string())),
        )?;
    }

    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(indices.len())
}

/// Loaded text is Latin-1 by construction; anything above U+00FF degrades
/// to `?` rather than feeding `encode_latin1_lossy` out-of-range input.
fn encode_field(field: &str) -> Vec<u8> {
    if is_str_latin1(field) {
        encode_latin1_lossy(field).into_owned()
    } else {
        let sanitized: String = field
            .chars()
            .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
            .collect();
        encode_latin1_lossy(&sanitized).into_owned()
    }
}
