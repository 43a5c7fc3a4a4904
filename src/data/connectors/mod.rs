mod csv;
mod excel;
mod types;
mod validator;

pub use csv::TicketCsvConnector;
pub use excel::TicketExcelConnector;
pub use types::LoadReport;
pub use validator::TicketValidator;

use crate::error::Result;
use std::path::Path;

/// Pick the connector by file extension; anything that is not a workbook is read as CSV
pub fn load_tickets<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => TicketExcelConnector::load(path),
        _ => TicketCsvConnector::load(path),
    }
}
