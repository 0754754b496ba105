/// Data layer: core types, loading, filtering, aggregation, and export.
/// Pure functions over an immutable table; no egui in here.
///
/// Architecture:
/// ```text
///  final_predictions_by_position.csv  (ISO-8859-1)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse → PlayerTable, fold names to ASCII
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ PlayerTable  │  Vec<PlayerRecord>, header order, distincts, spans
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching indices
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐  ┌───────────┐  ┌──────────┐
///   │ display   │  │ aggregate  │  │  export   │
///   └──────────┘  └───────────┘  └──────────┘
///        │              │
///        └──────┬───────┘
///               ▼
///         DashboardView  (view::render_state)
/// ```

pub mod aggregate;
pub mod display;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
