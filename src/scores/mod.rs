//! High scores for Blossom
//!
//! The best single word and the best game total per bank.

mod book;
mod date;

pub use book::{GameRank, GameRecord, ScoreBook, ScoreBookError, WordRecord};
pub use date::{civil_from_days, format_date, format_timestamp, timestamp, today};

/// Default score book location, relative to the working directory
pub const DEFAULT_SCORES: &str = "scores.txt";
