use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Name";
pub const COL_POSITION: &str = "Position_Cluster_fifa";
pub const COL_CLUB: &str = "Club_fifa";
pub const COL_AGE: &str = "Age_fifa";
pub const COL_MARKET_VALUE: &str = "market_value_in_eur";
pub const COL_PREDICTED_VALUE: &str = "predicted_market_value";

/// Columns the loader insists on. Everything else is passed through.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_POSITION,
    COL_CLUB,
    COL_AGE,
    COL_MARKET_VALUE,
    COL_PREDICTED_VALUE,
];

/// Lower bound of the market-value slider. The source data may contain zero
/// valuations; the range never drops below this constant.
pub const MARKET_VALUE_FLOOR: f64 = 0.1;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a pass-through column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell for columns the dashboard does not interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Empty,
}

impl CellValue {
    /// Numeric reading of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// The table/export form: floats use Rust's shortest round-trip
    /// formatting, empty cells stay empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single player (one row of the predictions CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    /// Display name, ASCII-folded by the loader.
    pub name: String,
    pub position: String,
    pub club: String,
    pub age: i64,
    /// Observed market value in euro.
    pub market_value: f64,
    /// Model-predicted market value in euro.
    pub predicted_value: f64,
    /// Remaining columns, untouched: column name → value.
    pub extra: BTreeMap<String, CellValue>,
}

impl PlayerRecord {
    /// Uniform column accessor so display and export can treat the six fixed
    /// columns and the pass-through columns alike.
    pub fn field(&self, column: &str) -> CellValue {
        match column {
            COL_NAME => CellValue::Text(self.name.clone()),
            COL_POSITION => CellValue::Text(self.position.clone()),
            COL_CLUB => CellValue::Text(self.club.clone()),
            COL_AGE => CellValue::Integer(self.age),
            COL_MARKET_VALUE => CellValue::Float(self.market_value),
            COL_PREDICTED_VALUE => CellValue::Float(self.predicted_value),
            other => self.extra.get(other).cloned().unwrap_or(CellValue::Empty),
        }
    }
}

// ---------------------------------------------------------------------------
// PlayerTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PlayerTable {
    /// All players (rows), in file order.
    pub records: Vec<PlayerRecord>,
    /// Column names in source-header order; drives table display and export.
    pub columns: Vec<String>,
    /// Distinct positions present in the data, sorted.
    pub positions: BTreeSet<String>,
    /// Distinct clubs present in the data, sorted.
    pub clubs: BTreeSet<String>,
    /// Observed inclusive age range.
    pub age_span: (i64, i64),
    /// Market-value slider range: `MARKET_VALUE_FLOOR` up to the observed max.
    pub value_span: (f64, f64),
}

impl PlayerTable {
    /// Index the loaded rows: distinct categorical values and numeric spans.
    pub fn new(columns: Vec<String>, records: Vec<PlayerRecord>) -> Self {
        let mut positions = BTreeSet::new();
        let mut clubs = BTreeSet::new();
        let mut age_span = (i64::MAX, i64::MIN);
        let mut max_value = f64::MIN;

        for record in &records {
            positions.insert(record.position.clone());
            clubs.insert(record.club.clone());
            age_span.0 = age_span.0.min(record.age);
            age_span.1 = age_span.1.max(record.age);
            max_value = max_value.max(record.market_value);
        }

        if records.is_empty() {
            age_span = (0, 0);
            max_value = MARKET_VALUE_FLOOR;
        }

        PlayerTable {
            records,
            columns,
            positions,
            clubs,
            age_span,
            value_span: (MARKET_VALUE_FLOOR, max_value.max(MARKET_VALUE_FLOOR)),
        }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
