use crate::error::{OptimizerError, Result};
use crate::types::{Ticket, NUMBER_MAX, NUMBER_MIN, PICK_COUNT};
use std::collections::BTreeSet;

pub struct TicketValidator;

impl TicketValidator {
    /// Raw ticket text for one spreadsheet row. The ticket lives in column A; when column A
    /// holds no comma the row is taken to spread one number per cell over the first 7 cells.
    pub fn row_text<S: AsRef<str>>(cells: &[S]) -> String {
        match cells.first() {
            Some(first) if first.as_ref().contains(',') => first.as_ref().to_string(),
            _ => cells
                .iter()
                .take(PICK_COUNT)
                .map(|c| c.as_ref().trim())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Parse one raw row such as `"5, 1,2,3,4,6,7"` into a ticket.
    ///
    /// Tokens are split on commas and trimmed; tokens that are not plain digits are
    /// ignored and repeated numbers collapse. The row is valid when exactly 7 distinct
    /// numbers in range remain. Numbers are stored ascending.
    pub fn parse_row(position: usize, raw: &str) -> Result<Ticket> {
        let mut numbers = BTreeSet::new();
        for token in raw.split(',').map(str::trim) {
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            // digit strings too long for u32 are out of range anyway
            let value = token.parse::<u32>().unwrap_or(u32::MAX);
            numbers.insert(value);
        }

        if numbers.len() != PICK_COUNT {
            return Err(OptimizerError::InvalidTicket {
                position,
                reason: format!(
                    "expected {} distinct numbers, found {}",
                    PICK_COUNT,
                    numbers.len()
                ),
            });
        }

        let mut in_range = Vec::with_capacity(PICK_COUNT);
        for &n in &numbers {
            if n < NUMBER_MIN as u32 || n > NUMBER_MAX as u32 {
                return Err(OptimizerError::InvalidTicket {
                    position,
                    reason: format!("number {} out of range ({}-{})", n, NUMBER_MIN, NUMBER_MAX),
                });
            }
            in_range.push(n as u8);
        }

        Ticket::new(position, &in_range)
    }
}
