use crate::error::{OptimizerError, Result};
use crate::types::PICK_COUNT;
use polars::prelude::*;
use std::path::Path;
use super::{types::LoadReport, validator::TicketValidator};

pub struct TicketCsvConnector;

impl TicketCsvConnector {
    /// Load a headerless ticket CSV into a validated pool.
    ///
    /// Tickets are read from column A (`"1,2,3,4,5,6,7"`); other columns such as ids or
    /// prices are ignored. Files with one number per cell are also accepted.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
        let df = CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| OptimizerError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        let rows = Self::rows_from_frame(&df)?;
        let report = LoadReport::from_rows(rows);

        log::info!(
            "Loaded {} valid tickets from {} rows ({} rejected)",
            report.valid_count(),
            report.rows_read,
            report.rejected.len()
        );
        Ok(report)
    }

    fn rows_from_frame(df: &DataFrame) -> Result<Vec<String>> {
        let columns = df
            .get_columns()
            .iter()
            .take(PICK_COUNT)
            .map(|c| c.cast(&DataType::String))
            .collect::<PolarsResult<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let mut cells = Vec::with_capacity(columns.len());
            for column in &columns {
                cells.push(column.str()?.get(i).unwrap_or(""));
            }
            rows.push(TicketValidator::row_text(&cells));
        }

        Ok(rows)
    }
}
