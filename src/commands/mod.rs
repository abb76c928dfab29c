//! Command implementations

pub mod filter;
pub mod play;
pub mod simulate;
pub mod solve;

pub use filter::{FilterError, FilterResult, filter_words, parse_pairs};
pub use play::{USER_MODE, run_play};
pub use simulate::{SimulationReport, run_simulation};
pub use solve::{GuessStep, SolveError, SolveResult, solve_word};
