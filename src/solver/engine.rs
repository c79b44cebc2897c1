//! Word proposal engines
//!
//! Defines the Engine trait, the per-round input it receives, and the
//! runtime-selectable engine enum.

use super::{GreedyEngine, Planner};
use crate::core::{Bank, RotationPolicy};
use crate::wordlists::Dictionary;
use std::fmt;

/// Everything an engine needs to know about the current round
#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    pub bank: &'a Bank,
    /// Known words, already filtered to the bank
    pub dictionary: &'a Dictionary,
    /// Words proposed earlier this session, accepted or not
    pub played: &'a [String],
    /// Round index, 0-based
    pub round: usize,
    /// This round's special letter
    pub special: u8,
    /// Points scored so far
    pub score: u32,
    pub policy: RotationPolicy,
}

/// A proposed word for the current round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    /// Points the word earns under the current special letter
    pub points: u32,
    /// Projected end-of-game total, when the engine plans ahead
    pub expected_total: Option<u32>,
}

/// Reasons an engine cannot propose a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// All twelve rounds have been played
    GameOver { round: usize },
    /// The special letter is not one of the bank's petals
    NotAPetal(char),
    /// No unplayed legal word is left for the special letter
    NoWordAvailable { letter: char },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver { round } => write!(f, "Game is over (round {})", round + 1),
            Self::NotAPetal(c) => {
                write!(f, "Special letter '{}' is not a petal", c.to_ascii_uppercase())
            }
            Self::NoWordAvailable { letter } => write!(
                f,
                "No legal word left for special letter {}",
                letter.to_ascii_uppercase()
            ),
        }
    }
}

impl std::error::Error for PlanError {}

/// A policy for proposing the next word
pub trait Engine {
    /// Short name used on the command line
    fn name(&self) -> &'static str;

    /// Propose a word for the round described by `ctx`
    ///
    /// # Errors
    /// Returns `PlanError` if the game is over, the special letter is not a
    /// petal, or no playable word remains for it.
    fn suggest(&self, ctx: &RoundContext<'_>) -> Result<Suggestion, PlanError>;
}

/// Enum wrapper for all engine types
///
/// Allows runtime selection of engine while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    /// Round-allocation planner (default)
    Better(Planner),
    /// Highest score this round, no look-ahead
    Greedy(GreedyEngine),
}

impl Engine for EngineType {
    fn name(&self) -> &'static str {
        match self {
            Self::Better(e) => e.name(),
            Self::Greedy(e) => e.name(),
        }
    }

    fn suggest(&self, ctx: &RoundContext<'_>) -> Result<Suggestion, PlanError> {
        match self {
            Self::Better(e) => e.suggest(ctx),
            Self::Greedy(e) => e.suggest(ctx),
        }
    }
}

impl EngineType {
    /// Create engine from name string
    ///
    /// Supported names: "better", "planner", "greedy".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "better" | "planner" => Some(Self::Better(Planner)),
            "greedy" => Some(Self::Greedy(GreedyEngine)),
            _ => None,
        }
    }
}

impl Default for EngineType {
    fn default() -> Self {
        Self::Better(Planner)
    }
}
