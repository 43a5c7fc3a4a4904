use crate::error::{OptimizerError, Result};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use super::{types::LoadReport, validator::TicketValidator};

pub struct TicketExcelConnector;

impl TicketExcelConnector {
    /// Load tickets from the first sheet of a workbook (xlsx, xlsm, xls, ods).
    /// Same row rules as the CSV connector: column A, or one number per cell.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
        let mut workbook = open_workbook_auto(path.as_ref())
            .map_err(|e| OptimizerError::DataLoading(format!("Failed to open workbook: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| OptimizerError::DataLoading("Workbook has no sheets".to_string()))?
            .map_err(|e| OptimizerError::DataLoading(format!("Failed to read sheet: {}", e)))?;

        let rows: Vec<String> = range
            .rows()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
                TicketValidator::row_text(&cells)
            })
            .collect();
        let report = LoadReport::from_rows(rows);

        log::info!(
            "Loaded {} valid tickets from {} sheet rows ({} rejected)",
            report.valid_count(),
            report.rows_read,
            report.rejected.len()
        );
        Ok(report)
    }
}
