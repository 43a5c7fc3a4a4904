use crate::engines::evaluation::{MatchCounter, PayoutEvaluator, TicketIndex};
use crate::types::{Combo, SearchResult, NUMBER_MAX, NUMBER_MIN};

/// Outcome of one climb to a local optimum
#[derive(Debug, Clone)]
pub struct ClimbOutcome {
    pub result: SearchResult,
    /// Number of accepted swaps
    pub moves: usize,
}

/// An accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub remove: u8,
    pub add: u8,
    pub combo: Combo,
    pub total_payout: u64,
}

/// First-improvement single-swap local search.
///
/// Removal candidates are scanned in the combo's stored (ascending) order, replacements
/// in ascending order over 1..=37. The first swap that strictly lowers the total payout
/// is taken and the scan restarts on the new combo. A full scan without an accepted swap
/// ends the climb. Ties are never accepted.
pub struct HillClimber<'a> {
    index: &'a TicketIndex,
    evaluator: &'a PayoutEvaluator,
}

impl<'a> HillClimber<'a> {
    pub fn new(index: &'a TicketIndex, evaluator: &'a PayoutEvaluator) -> Self {
        Self { index, evaluator }
    }

    /// Full evaluation of a combo against the pool
    pub fn evaluate(&self, combo: &Combo) -> SearchResult {
        let matches = MatchCounter::new(self.index).count(combo);
        let (total_payout, histogram) = self.evaluator.evaluate(&matches);
        SearchResult {
            combo: *combo,
            total_payout,
            histogram,
        }
    }

    /// First strictly improving swap from `combo`, if any
    pub fn first_improvement(&self, combo: &Combo) -> Option<Swap> {
        let matches = MatchCounter::new(self.index).count(combo);
        let total = self.evaluator.total(&matches) as i128;
        let mut without = Vec::with_capacity(matches.len());
        self.scan(combo, &matches, total, &mut without)
    }

    pub fn climb(&self, start: Combo) -> ClimbOutcome {
        let mut combo = start;
        let mut matches = MatchCounter::new(self.index).count(&combo);
        let mut total = self.evaluator.total(&matches) as i128;
        let mut without = Vec::with_capacity(matches.len());
        let mut moves = 0;

        // on success `without` holds the match vector of the new combo
        while let Some(swap) = self.scan(&combo, &matches, total, &mut without) {
            std::mem::swap(&mut matches, &mut without);
            combo = swap.combo;
            total = swap.total_payout as i128;
            moves += 1;
            log::trace!("swap {} -> {}: total {}", swap.remove, swap.add, total);
        }

        let (total_payout, histogram) = self.evaluator.evaluate(&matches);
        debug_assert_eq!(total_payout as i128, total);

        ClimbOutcome {
            result: SearchResult {
                combo,
                total_payout,
                histogram,
            },
            moves,
        }
    }

    /// One pass over (remove, add) pairs in search order. Each candidate total is derived
    /// from the "without remove" vector by adding the payout step of every ticket holding `add`.
    fn scan(&self, combo: &Combo, matches: &[u8], total: i128, without: &mut Vec<u8>) -> Option<Swap> {
        let table = self.evaluator.table();
        // payout change when a ticket goes from m-1 to m matches
        let step = |m: u8| table.get(m as usize) as i128 - table.get(m as usize - 1) as i128;

        for &remove in combo.numbers() {
            without.clear();
            without.extend_from_slice(matches);
            let mut base = total;
            for &p in self.index.tickets_with(remove) {
                base -= step(without[p]);
                without[p] -= 1;
            }

            for add in NUMBER_MIN..=NUMBER_MAX {
                if combo.contains(add) {
                    continue;
                }

                let candidate = self
                    .index
                    .tickets_with(add)
                    .iter()
                    .fold(base, |acc, &p| acc + step(without[p] + 1));

                if candidate < total {
                    for &p in self.index.tickets_with(add) {
                        without[p] += 1;
                    }
                    return Some(Swap {
                        remove,
                        add,
                        combo: combo.swap(remove, add),
                        total_payout: candidate as u64,
                    });
                }
            }
        }

        None
    }
}
