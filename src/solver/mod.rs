//! Wordle solving algorithms
//!
//! The Strategy trait, its concrete variants and the solver that applies them.

mod engine;
pub mod entropy;
mod matched;
pub mod strategy;

pub use engine::Solver;
pub use entropy::EntropyStrategy;
pub use matched::OnlyMatchedPatterns;
pub use strategy::{SolverError, Strategy, StrategyType};
