use crate::types::{MatchHistogram, MATCH_BUCKETS};
use serde::{Deserialize, Serialize};

/// Payout per ticket, indexed by match count 0..=7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutTable {
    amounts: [u64; MATCH_BUCKETS],
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self {
            amounts: [0, 0, 0, 15, 750, 4000, 10000, 100000],
        }
    }
}

impl PayoutTable {
    pub fn new(amounts: [u64; MATCH_BUCKETS]) -> Self {
        Self { amounts }
    }

    /// Unknown match counts pay nothing
    pub fn get(&self, matches: usize) -> u64 {
        self.amounts.get(matches).copied().unwrap_or(0)
    }

    pub fn amounts(&self) -> &[u64; MATCH_BUCKETS] {
        &self.amounts
    }
}

/// Reduces a match vector to (total payout, histogram)
#[derive(Debug, Clone)]
pub struct PayoutEvaluator {
    table: PayoutTable,
}

impl PayoutEvaluator {
    pub fn new(table: PayoutTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PayoutTable {
        &self.table
    }

    pub fn evaluate(&self, matches: &[u8]) -> (u64, MatchHistogram) {
        let mut histogram = MatchHistogram::default();
        for &m in matches {
            histogram.record(m);
        }

        let total = histogram
            .counts()
            .iter()
            .enumerate()
            .map(|(k, &count)| count as u64 * self.table.get(k))
            .sum();

        (total, histogram)
    }

    /// Total payout without building the histogram
    pub fn total(&self, matches: &[u8]) -> u64 {
        matches.iter().map(|&m| self.table.get(m as usize)).sum()
    }
}
