pub mod hill_climber;
pub mod optimizer;
pub mod progress;
pub mod result_set;

pub use hill_climber::{ClimbOutcome, HillClimber, Swap};
pub use optimizer::{random_combo, Optimizer, RunSummary, StopReason};
pub use progress::{ConsoleProgressCallback, NoProgress, ProgressCallback};
pub use result_set::{rank, AcceptanceFilter, ResultSet};
