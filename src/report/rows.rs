use crate::engines::search::RunSummary;
use crate::types::SearchResult;
use serde::{Deserialize, Serialize};

/// Flat view of a result for display and export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub rank: usize,
    pub combo: String,
    pub total_payout: u64,
    pub threes: usize,
    pub fours: usize,
    pub fives: usize,
    pub sixes: usize,
    pub sevens: usize,
}

impl ResultRow {
    pub fn from_result(rank: usize, result: &SearchResult) -> Self {
        let h = &result.histogram;
        Self {
            rank,
            combo: result.combo.to_string(),
            total_payout: result.total_payout,
            threes: h[3],
            fours: h[4],
            fives: h[5],
            sixes: h[6],
            sevens: h[7],
        }
    }
}

pub fn to_rows(results: &[SearchResult]) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow::from_result(i + 1, r))
        .collect()
}

/// Full report: ranked rows plus the pool price they are compared against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub currency: String,
    pub total_ticket_price: u64,
    pub restarts_run: usize,
    pub accepted: usize,
    pub rows: Vec<ResultRow>,
}

impl Report {
    pub fn from_summary(summary: &RunSummary, currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            total_ticket_price: summary.total_ticket_price,
            restarts_run: summary.restarts_run,
            accepted: summary.accepted,
            rows: to_rows(summary.results.get_all()),
        }
    }
}

impl Report {
    pub fn payout_header(&self) -> String {
        format!("Total Payout ({})", self.currency)
    }
}
