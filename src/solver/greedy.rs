//! Greedy engine
//!
//! Plays the highest-scoring word for the current special letter with no
//! regard for later rounds. Kept as a baseline for the planner.

use super::engine::{Engine, PlanError, RoundContext, Suggestion};
use crate::core::{ROUNDS, is_playable, score_word};

/// Rank the playable words for the current special letter, best first
///
/// Ties keep dictionary (alphabetical) order.
#[must_use]
pub fn ranked_words(ctx: &RoundContext<'_>) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = ctx
        .dictionary
        .words()
        .filter(|w| is_playable(ctx.bank, ctx.played, w))
        .map(|w| (w.to_string(), score_word(ctx.bank, ctx.special, w)))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
}

/// Highest score for the current letter, first alphabetically on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyEngine;

impl Engine for GreedyEngine {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn suggest(&self, ctx: &RoundContext<'_>) -> Result<Suggestion, PlanError> {
        if ctx.round >= ROUNDS {
            return Err(PlanError::GameOver { round: ctx.round });
        }
        if ctx.bank.petal_index(ctx.special).is_none() {
            return Err(PlanError::NotAPetal(char::from(ctx.special)));
        }

        let (word, points) = ranked_words(ctx)
            .into_iter()
            .next()
            .ok_or(PlanError::NoWordAvailable {
                letter: char::from(ctx.special),
            })?;

        Ok(Suggestion {
            word,
            points,
            expected_total: None,
        })
    }
}
