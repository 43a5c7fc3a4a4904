use super::rows::{Report, ResultRow};
use crate::error::{OptimizerError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

fn rows_to_frame(rows: &[ResultRow], payout_header: &str) -> Result<DataFrame> {
    let combos: Vec<String> = rows.iter().map(|r| r.combo.clone()).collect();
    let totals: Vec<u64> = rows.iter().map(|r| r.total_payout).collect();
    let count = |f: fn(&ResultRow) -> usize| -> Vec<u64> { rows.iter().map(|r| f(r) as u64).collect() };

    let df = df! {
        "Combo" => combos,
        payout_header => totals,
        "Tickets with 3 matches" => count(|r| r.threes),
        "Tickets with 4 matches" => count(|r| r.fours),
        "Tickets with 5 matches" => count(|r| r.fives),
        "Tickets with 6 matches" => count(|r| r.sixes),
        "Tickets with 7 matches" => count(|r| r.sevens),
    }?;
    Ok(df)
}

/// Write ranked rows as CSV with a header row
pub fn export_csv<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let mut df = rows_to_frame(&report.rows, &report.payout_header())?;
    let mut file = File::create(path.as_ref()).map_err(|e| {
        OptimizerError::Export(format!("Failed to create {}: {}", path.as_ref().display(), e))
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    log::info!("Wrote {} rows to {}", report.rows.len(), path.as_ref().display());
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(report: &Report, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        OptimizerError::Export(format!("Failed to create {}: {}", path.as_ref().display(), e))
    })?;
    serde_json::to_writer_pretty(file, report)?;
    log::info!("Wrote report to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_shape() {
        let rows = vec![ResultRow {
            rank: 1,
            combo: "1,2,3,4,5,6,7".to_string(),
            total_payout: 30,
            threes: 2,
            fours: 0,
            fives: 0,
            sixes: 0,
            sevens: 0,
        }];
        let df = rows_to_frame(&rows, "Total Payout (PKR)").unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 7);
        assert!(df.column("Total Payout (PKR)").is_ok());
    }
}
