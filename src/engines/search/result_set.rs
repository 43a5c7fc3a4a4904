use crate::types::{Combo, SearchResult};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Acceptance rule for local optima: payout below the pool price and
/// the 4-match count within [min_four, max_four]
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceFilter {
    pub price_ceiling: u64,
    pub min_four: usize,
    pub max_four: usize,
}

impl AcceptanceFilter {
    pub fn accepts(&self, result: &SearchResult) -> bool {
        let fours = result.fours();
        result.total_payout < self.price_ceiling && self.min_four <= fours && fours <= self.max_four
    }
}

/// Ranking: lower payout first, then more 4-match tickets first
pub fn rank(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.total_payout
        .cmp(&b.total_payout)
        .then_with(|| b.fours().cmp(&a.fours()))
}

/// Top-K accepted results, kept ranked. Equal-ranked results keep insertion order.
#[derive(Debug, Clone)]
pub struct ResultSet {
    results: Vec<SearchResult>,
    max_size: usize,
    dedupe: bool,
    seen: HashSet<Combo>,
}

impl ResultSet {
    pub fn new(max_size: usize) -> Self {
        Self {
            results: Vec::new(),
            max_size,
            dedupe: false,
            seen: HashSet::new(),
        }
    }

    /// Same as `new`, but a combo already offered once is rejected
    pub fn new_deduplicated(max_size: usize) -> Self {
        Self {
            dedupe: true,
            ..Self::new(max_size)
        }
    }

    /// Returns false when the result was rejected as a duplicate or fell outside the top K
    pub fn try_add(&mut self, result: SearchResult) -> bool {
        if self.dedupe && !self.seen.insert(result.combo) {
            return false;
        }

        // after every equal-ranked entry, so earlier arrivals stay ahead
        let at = self
            .results
            .partition_point(|kept| rank(kept, &result) != Ordering::Greater);
        if at >= self.max_size {
            return false;
        }

        self.results.insert(at, result);
        self.results.truncate(self.max_size);
        true
    }

    pub fn get_all(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn best(&self) -> Option<&SearchResult> {
        self.results.first()
    }

    pub fn into_vec(self) -> Vec<SearchResult> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchHistogram;

    fn result(first: u8, total: u64, fours: usize) -> SearchResult {
        let combo = Combo::new(&[first, 31, 32, 33, 34, 35, 36]).unwrap();
        let mut counts = [0; 8];
        counts[4] = fours;
        SearchResult {
            combo,
            total_payout: total,
            histogram: MatchHistogram::from_counts(counts),
        }
    }

    #[test]
    fn test_filter() {
        let filter = AcceptanceFilter {
            price_ceiling: 100,
            min_four: 2,
            max_four: 5,
        };
        assert!(filter.accepts(&result(1, 99, 2)));
        assert!(filter.accepts(&result(1, 0, 5)));
        assert!(!filter.accepts(&result(1, 100, 3)));
        assert!(!filter.accepts(&result(1, 10, 1)));
        assert!(!filter.accepts(&result(1, 10, 6)));
    }

    #[test]
    fn test_ranking_and_trim() {
        let mut set = ResultSet::new(3);
        assert!(set.try_add(result(1, 50, 2)));
        assert!(set.try_add(result(2, 30, 2)));
        assert!(set.try_add(result(3, 30, 4)));
        assert!(!set.try_add(result(4, 60, 5)));
        assert!(set.try_add(result(5, 10, 2)));

        let firsts: Vec<u8> = set.get_all().iter().map(|r| r.combo.numbers()[0]).collect();
        assert_eq!(firsts, vec![5, 3, 2]);
        assert_eq!(set.best().map(|r| r.total_payout), Some(10));
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let mut set = ResultSet::new(10);
        set.try_add(result(1, 20, 3));
        set.try_add(result(2, 20, 3));
        set.try_add(result(3, 20, 3));
        let firsts: Vec<u8> = set.get_all().iter().map(|r| r.combo.numbers()[0]).collect();
        assert_eq!(firsts, vec![1, 2, 3]);
    }

    #[test]
    fn test_identical_result_past_capacity_is_rejected() {
        let mut set = ResultSet::new(1);
        assert!(set.try_add(result(1, 20, 3)));
        assert!(!set.try_add(result(1, 20, 3)));
        assert_eq!(set.len(), 1);

        assert!(set.try_add(result(1, 10, 3)));
        assert_eq!(set.best().map(|r| r.total_payout), Some(10));
    }

    #[test]
    fn test_duplicates_kept_unless_deduplicated() {
        let mut plain = ResultSet::new(10);
        plain.try_add(result(1, 20, 3));
        plain.try_add(result(1, 20, 3));
        assert_eq!(plain.len(), 2);

        let mut dedup = ResultSet::new_deduplicated(10);
        assert!(dedup.try_add(result(1, 20, 3)));
        assert!(!dedup.try_add(result(1, 20, 3)));
        assert_eq!(dedup.len(), 1);
    }
}
