//! End-of-game outcome classification.

pub mod logic;
pub mod types;

pub use logic::{ending_score, resolve_ending};
pub use types::{EndingCounters, EndingFlags, EndingId, EndingInput, EndingResult, EndingStats};
