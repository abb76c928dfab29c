//! Wordle Engine
//!
//! Wordle feedback scoring, a conservative candidate filter, and pluggable
//! solver strategies, with a game session, statistics and a CLI on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{GuessHistory, Word, score};
//! use wordle_engine::filter::filter_candidates;
//!
//! let guess = Word::new("goose").unwrap();
//! let solution = Word::new("grows").unwrap();
//!
//! // Two-pass multiset scoring: exact matches first, then misplaced letters
//! let feedback = score(&guess, &solution);
//! assert_eq!(feedback.to_string(), "CWCMW");
//!
//! let dictionary: Vec<Word> = ["grows", "gross", "slate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let history: GuessHistory = vec![(guess, feedback)].into();
//! let remaining = filter_candidates(&history, &dictionary);
//! assert!(remaining.iter().any(|w| w.text() == "GROWS"));
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod filter;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

// Game session and statistics
pub mod game;

// Request handlers for an external front end
pub mod service;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
