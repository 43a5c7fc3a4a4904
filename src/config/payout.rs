use super::traits::ConfigSection;
use crate::engines::evaluation::PayoutTable;
use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutConfig {
    /// Price of a single ticket
    pub unit_price: u64,
    /// Payout per ticket for 0..=7 matches
    pub table: PayoutTable,
    /// Currency label shown in reports, e.g. "Total Payout (PKR)"
    pub currency: String,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            unit_price: 4,
            table: PayoutTable::default(),
            currency: "PKR".to_string(),
        }
    }
}

impl ConfigSection for PayoutConfig {
    fn section_name() -> &'static str {
        "payout"
    }

    fn validate(&self) -> Result<(), OptimizerError> {
        if self.unit_price == 0 {
            return Err(OptimizerError::Configuration(
                "Unit price must be positive".to_string()
            ));
        }
        Ok(())
    }
}
