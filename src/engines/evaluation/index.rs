use crate::types::{TicketPool, NUMBER_MAX};

/// Inverted index: number -> positions of the tickets that contain it.
/// Built once per run and shared read-only by every restart.
#[derive(Debug, Clone)]
pub struct TicketIndex {
    // slot 0 unused so numbers index directly
    positions: Vec<Vec<usize>>,
    pool_size: usize,
}

impl TicketIndex {
    pub fn build(pool: &TicketPool) -> Self {
        let mut positions = vec![Vec::new(); NUMBER_MAX as usize + 1];

        for (position, ticket) in pool.iter().enumerate() {
            for &number in ticket.numbers() {
                positions[number as usize].push(position);
            }
        }

        Self {
            positions,
            pool_size: pool.len(),
        }
    }

    /// Ticket positions containing `number`, ascending. Empty for out-of-range numbers.
    pub fn tickets_with(&self, number: u8) -> &[usize] {
        self.positions
            .get(number as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
}
