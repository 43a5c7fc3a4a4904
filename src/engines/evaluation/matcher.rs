use crate::engines::evaluation::TicketIndex;
use crate::types::Combo;

/// Per-ticket match counts for a combo, aligned to pool order
pub struct MatchCounter<'a> {
    index: &'a TicketIndex,
}

impl<'a> MatchCounter<'a> {
    pub fn new(index: &'a TicketIndex) -> Self {
        Self { index }
    }

    pub fn count(&self, combo: &Combo) -> Vec<u8> {
        let mut matches = Vec::new();
        self.count_into(combo, &mut matches);
        matches
    }

    /// Same as `count`, reusing `matches` as the output buffer
    pub fn count_into(&self, combo: &Combo, matches: &mut Vec<u8>) {
        matches.clear();
        matches.resize(self.index.pool_size(), 0);

        for &number in combo.numbers() {
            for &position in self.index.tickets_with(number) {
                matches[position] += 1;
            }
        }
    }
}
