//! UI widgets for reusable components.

pub mod radar_chart;
pub mod session_table;
pub mod summary_card;

pub use radar_chart::RadarChart;
pub use session_table::SessionTable;
pub use summary_card::SummaryCard;
