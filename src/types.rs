use crate::error::{OptimizerError, Result};
use std::fmt;

/// Smallest number that can appear on a ticket
pub const NUMBER_MIN: u8 = 1;
/// Largest number that can appear on a ticket
pub const NUMBER_MAX: u8 = 37;
/// Numbers per ticket and per combo
pub const PICK_COUNT: usize = 7;
/// Number of histogram buckets (0..=7 matches)
pub const MATCH_BUCKETS: usize = PICK_COUNT + 1;

/// Checks the 7-distinct-numbers-in-range invariant shared by tickets and combos
fn check_numbers(numbers: &[u8]) -> std::result::Result<[u8; PICK_COUNT], String> {
    if numbers.len() != PICK_COUNT {
        return Err(format!(
            "expected {} numbers, got {}",
            PICK_COUNT,
            numbers.len()
        ));
    }

    let mut seen = 0u64;
    let mut out = [0u8; PICK_COUNT];
    for (i, &n) in numbers.iter().enumerate() {
        if !(NUMBER_MIN..=NUMBER_MAX).contains(&n) {
            return Err(format!(
                "number {} out of range ({}-{})",
                n, NUMBER_MIN, NUMBER_MAX
            ));
        }
        let bit = 1u64 << n;
        if seen & bit != 0 {
            return Err(format!("duplicate number {}", n));
        }
        seen |= bit;
        out[i] = n;
    }

    Ok(out)
}

/// A submitted ticket: 7 distinct numbers in [1, 37], kept in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [u8; PICK_COUNT],
}

impl Ticket {
    /// `position` is the row index the ticket came from and is only used for error reporting
    pub fn new(position: usize, numbers: &[u8]) -> Result<Self> {
        let numbers = check_numbers(numbers)
            .map_err(|reason| OptimizerError::InvalidTicket { position, reason })?;
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.numbers
    }
}

/// Ordered, immutable collection of tickets. Position is identity for match vectors.
#[derive(Debug, Clone, Default)]
pub struct TicketPool {
    tickets: Vec<Ticket>,
}

impl TicketPool {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Build a pool from raw rows, skipping rows that break the ticket invariant.
    /// Every skipped row is returned as an `InvalidTicket` error.
    pub fn from_rows<I>(rows: I) -> (Self, Vec<OptimizerError>)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut tickets = Vec::new();
        let mut rejected = Vec::new();

        for (position, row) in rows.into_iter().enumerate() {
            match Ticket::new(position, row.as_ref()) {
                Ok(ticket) => tickets.push(ticket),
                Err(e) => {
                    log::warn!("Skipping ticket: {}", e);
                    rejected.push(e);
                }
            }
        }

        (Self { tickets }, rejected)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    /// Price paid for the whole pool
    pub fn total_price(&self, unit_price: u64) -> u64 {
        self.tickets.len() as u64 * unit_price
    }
}

/// Candidate selection: 7 sorted distinct numbers plus a bitmask for O(1) membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combo {
    numbers: [u8; PICK_COUNT],
    mask: u64,
}

impl Combo {
    pub fn new(numbers: &[u8]) -> Result<Self> {
        let mut numbers = check_numbers(numbers).map_err(OptimizerError::InvalidCombo)?;
        numbers.sort_unstable();
        Ok(Self::from_sorted(numbers))
    }

    /// Build from 7 numbers already known to be distinct and in range
    pub(crate) fn from_distinct(mut numbers: [u8; PICK_COUNT]) -> Self {
        numbers.sort_unstable();
        Self::from_sorted(numbers)
    }

    fn from_sorted(numbers: [u8; PICK_COUNT]) -> Self {
        let mask = numbers.iter().fold(0u64, |m, &n| m | (1u64 << n));
        Self { numbers, mask }
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        number < 64 && self.mask & (1u64 << number) != 0
    }

    /// Replace `remove` with `add`, keeping the result sorted.
    /// Caller guarantees `remove` is in the combo and `add` is an absent in-range number.
    pub fn swap(&self, remove: u8, add: u8) -> Self {
        debug_assert!(self.contains(remove));
        debug_assert!(!self.contains(add));
        debug_assert!((NUMBER_MIN..=NUMBER_MAX).contains(&add));

        let mut numbers = self.numbers;
        if let Some(slot) = numbers.iter_mut().find(|n| **n == remove) {
            *slot = add;
        }
        numbers.sort_unstable();
        Self {
            numbers,
            mask: (self.mask & !(1u64 << remove)) | (1u64 << add),
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// counts[k] = number of tickets with exactly k matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchHistogram {
    counts: [usize; MATCH_BUCKETS],
}

impl MatchHistogram {
    pub fn from_counts(counts: [usize; MATCH_BUCKETS]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[usize; MATCH_BUCKETS] {
        &self.counts
    }

    pub fn get(&self, matches: usize) -> usize {
        self.counts.get(matches).copied().unwrap_or(0)
    }

    /// Sum over all buckets; always equals the pool size
    pub fn total_tickets(&self) -> usize {
        self.counts.iter().sum()
    }

    pub(crate) fn record(&mut self, matches: u8) {
        self.counts[matches as usize] += 1;
    }
}

impl std::ops::Index<usize> for MatchHistogram {
    type Output = usize;

    fn index(&self, matches: usize) -> &usize {
        &self.counts[matches]
    }
}

/// A local optimum together with its payout and match histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub combo: Combo,
    pub total_payout: u64,
    pub histogram: MatchHistogram,
}

impl SearchResult {
    /// Tickets with exactly 4 matches
    pub fn fours(&self) -> usize {
        self.histogram[4]
    }
}
