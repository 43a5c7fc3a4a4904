pub mod export;
pub mod rows;
pub mod table;

pub use export::{export_csv, export_json};
pub use rows::{to_rows, Report, ResultRow};
pub use table::{group_thousands, render_table};
