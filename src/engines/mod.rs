pub mod evaluation;
pub mod search;
