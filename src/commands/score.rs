//! Score command
//!
//! Scores one word in a bank under every possible special letter.

use crate::core::{Bank, is_legal, is_pangram, max_possible_score, score_word};
use crate::wordlists::{Dictionary, WordStatus};

/// Result of scoring a word
#[derive(Debug)]
pub struct ScoreResult {
    pub bank: Bank,
    pub word: String,
    pub legal: bool,
    pub pangram: bool,
    pub status: WordStatus,
    /// Points under each petal, in petal order
    pub by_letter: Vec<(u8, u32)>,
    /// Best score the word could reach in any bank
    pub max_possible: u32,
}

impl ScoreResult {
    /// Petal giving the highest score, first in petal order on ties
    #[must_use]
    pub fn best_letter(&self) -> Option<(u8, u32)> {
        self.by_letter
            .iter()
            .copied()
            .fold(None, |best, (l, p)| match best {
                Some((_, top)) if top >= p => best,
                _ => Some((l, p)),
            })
    }
}

/// Score `word` in `bank`
///
/// # Errors
///
/// Returns an error if the bank is not seven distinct letters or the word
/// is not alphabetic.
pub fn score_in_bank(
    bank: &str,
    word: &str,
    dictionary: &Dictionary,
) -> Result<ScoreResult, String> {
    let bank = Bank::new(bank).map_err(|e| format!("Invalid bank: {e}"))?;
    let word = word.trim().to_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(format!("Invalid word '{word}'"));
    }

    let by_letter = bank
        .petals()
        .iter()
        .map(|&l| (l, score_word(&bank, l, &word)))
        .collect();

    Ok(ScoreResult {
        legal: is_legal(&bank, &word),
        pangram: is_pangram(&bank, &word),
        status: dictionary.status(&word),
        max_possible: max_possible_score(&word),
        by_letter,
        bank,
        word,
    })
}
