//! Widget layer: panels, the formatted table, and the three bar charts.
//! Everything here renders from [`crate::state::AppState`] and its cached
//! view; derived data is never computed in the widgets themselves.

pub mod charts;
pub mod panels;
pub mod table;
