use super::traits::ConfigSection;
use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lower bound on tickets with exactly 4 matches (inclusive)
    pub min_four: usize,
    /// Upper bound on tickets with exactly 4 matches (inclusive)
    pub max_four: usize,
    pub restart_budget: usize,
    pub time_budget_secs: u64,
    pub top_k: usize,
    pub seed: Option<u64>,
    /// Climb restarts on the rayon pool
    pub parallel: bool,
    /// Coalesce identical combos found by different restarts
    pub dedupe: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_four: 2,
            max_four: 5,
            restart_budget: 300,
            time_budget_secs: 60,
            top_k: 10,
            seed: None,
            parallel: false,
            dedupe: false,
        }
    }
}

impl SearchConfig {
    pub fn time_budget(&self) -> Duration {
        Duration::from_secs(self.time_budget_secs)
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), OptimizerError> {
        if self.min_four > self.max_four {
            return Err(OptimizerError::Configuration(format!(
                "min_four ({}) must not exceed max_four ({})",
                self.min_four, self.max_four
            )));
        }
        if self.top_k == 0 {
            return Err(OptimizerError::Configuration(
                "top_k must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time_budget(), Duration::from_secs(60));
    }

    #[test]
    fn test_inverted_bound_rejected() {
        let config = SearchConfig {
            min_four: 6,
            max_four: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let config = SearchConfig {
            top_k: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
