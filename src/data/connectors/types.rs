use crate::error::OptimizerError;
use super::validator::TicketValidator;
use crate::types::TicketPool;

/// Outcome of reading a ticket file
#[derive(Debug)]
pub struct LoadReport {
    pub pool: TicketPool,
    pub rows_read: usize,
    /// One `InvalidTicket` per skipped row
    pub rejected: Vec<OptimizerError>,
}

impl LoadReport {
    /// Validate raw ticket rows, keeping order of the valid ones
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tickets = Vec::new();
        let mut rejected = Vec::new();
        let mut rows_read = 0;

        for (position, row) in rows.into_iter().enumerate() {
            rows_read += 1;
            match TicketValidator::parse_row(position, row.as_ref()) {
                Ok(ticket) => tickets.push(ticket),
                Err(e) => {
                    log::warn!("Skipping row: {}", e);
                    rejected.push(e);
                }
            }
        }

        Self {
            pool: TicketPool::new(tickets),
            rows_read,
            rejected,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.pool.len()
    }
}
