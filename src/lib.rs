//! Blossom Solver
//!
//! An assistant for the Blossom word game. Each game has a bank of seven
//! letters (a center and six petals) and twelve rounds; every round one
//! petal is the special letter and earns a bonus. The planner spreads the
//! strongest words over the rounds where they score most instead of
//! spending them early.
//!
//! # Quick Start
//!
//! ```rust
//! use blossom_solver::core::{Bank, score_word};
//!
//! let bank = Bank::new("reinost").unwrap();
//!
//! // 7 letters, one O, and every bank letter used
//! assert_eq!(score_word(&bank, b'o', "orients"), 24);
//! ```

// Core domain types
pub mod core;

// Word proposal engines
pub mod solver;

// Word lists
pub mod wordlists;

// High scores
pub mod scores;

// Game sessions
pub mod game;

// Runtime settings
pub mod config;

// Git sync for data files
pub mod sync;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
