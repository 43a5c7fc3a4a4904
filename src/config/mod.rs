pub mod traits;
pub mod payout;
pub mod search;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use payout::PayoutConfig;
pub use search::SearchConfig;
pub use traits::ConfigSection;
