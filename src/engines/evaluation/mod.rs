pub mod index;
pub mod matcher;
pub mod payout;

pub use index::TicketIndex;
pub use matcher::MatchCounter;
pub use payout::{PayoutEvaluator, PayoutTable};
