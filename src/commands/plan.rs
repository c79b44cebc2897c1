//! Plan command
//!
//! Shows the planner's full allocation of words to the remaining rounds.

use crate::core::{Bank, ROUNDS, RotationPolicy, fixed_special_letter};
use crate::solver::{Plan, RoundContext, plan_round};
use crate::wordlists::Dictionary;

/// Configuration for planning a round
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub bank: String,
    /// Round index, 0-based
    pub round: usize,
    /// Special letter for the round; defaults to the one the rotation
    /// reaches when every earlier word used its letter
    pub letter: Option<char>,
    /// Points already scored
    pub score: u32,
    /// Words already played
    pub played: Vec<String>,
}

impl PlanConfig {
    #[must_use]
    pub const fn new(bank: String) -> Self {
        Self {
            bank,
            round: 0,
            letter: None,
            score: 0,
            played: Vec::new(),
        }
    }
}

/// Result of planning a round
#[derive(Debug)]
pub struct PlanResult {
    pub bank: Bank,
    pub policy: RotationPolicy,
    pub plan: Plan,
    /// Legal words the planner could choose from
    pub candidates: usize,
}

/// Plan the round described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The bank is not seven distinct letters
/// - The round is past the last one
/// - The special letter is not one of the bank's petals
pub fn plan_bank(
    config: &PlanConfig,
    dictionary: &Dictionary,
    policy: RotationPolicy,
) -> Result<PlanResult, String> {
    let bank = Bank::new(&config.bank).map_err(|e| format!("Invalid bank: {e}"))?;
    if config.round >= ROUNDS {
        return Err(format!("Round must be between 1 and {ROUNDS}"));
    }

    let special = match config.letter {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase() as u8,
        Some(c) => return Err(format!("Invalid special letter '{c}'")),
        None => fixed_special_letter(&bank, config.round),
    };

    let dictionary = dictionary.for_bank(&bank);
    let played: Vec<String> = config.played.iter().map(|w| w.to_lowercase()).collect();
    let ctx = RoundContext {
        bank: &bank,
        dictionary: &dictionary,
        played: &played,
        round: config.round,
        special,
        score: config.score,
        policy,
    };
    let plan = plan_round(&ctx).map_err(|e| e.to_string())?;

    Ok(PlanResult {
        bank,
        policy,
        plan,
        candidates: dictionary.len(),
    })
}
