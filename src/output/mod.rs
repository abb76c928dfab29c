//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_filter_result, print_game_over, print_game_state, print_simulation_report,
    print_solve_result, print_summaries,
};
