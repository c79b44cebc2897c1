//! Formatting utilities for terminal output

use crate::core::{BANK_SIZE, Bank};
use crate::scores::{GameRank, GameRecord};
use crate::wordlists::{Dictionary, WordStatus};
use colored::Colorize;
use std::collections::BTreeSet;

/// Icon shown before a word for its dictionary status
///
/// Validated pangrams (seven distinct letters) get a blossom.
#[must_use]
pub fn word_icon(status: WordStatus, word: &str) -> &'static str {
    match status {
        WordStatus::Missing => "❌",
        WordStatus::Unvalidated => "🟡",
        WordStatus::Validated => {
            let distinct: BTreeSet<u8> = word.bytes().collect();
            if distinct.len() == BANK_SIZE { "🌸" } else { "✅" }
        }
    }
}

/// A word with its status icon, uppercased and colored by status
#[must_use]
pub fn display_word(word: &str, dictionary: &Dictionary) -> String {
    let status = dictionary.status(word);
    let text = word.to_uppercase();
    let styled = match status {
        WordStatus::Missing => text.red().bold(),
        WordStatus::Unvalidated => text.yellow().bold(),
        WordStatus::Validated => text.green().bold(),
    };
    format!("{} {styled}", word_icon(status, word))
}

/// Bank with the center letter bracketed, e.g. `[R] E I N O S T`
#[must_use]
pub fn format_bank(bank: &Bank) -> String {
    let petals: Vec<String> = bank
        .petals()
        .iter()
        .map(|&b| char::from(b).to_ascii_uppercase().to_string())
        .collect();
    format!(
        "[{}] {}",
        char::from(bank.center()).to_ascii_uppercase(),
        petals.join(" ")
    )
}

/// Uppercase display form of a letter byte
#[must_use]
pub fn letter(b: u8) -> char {
    char::from(b).to_ascii_uppercase()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Line announcing where a finished game landed in the score book
///
/// `bank_best` is the bank's stored record after the game was recorded.
#[must_use]
pub fn rank_message(rank: GameRank, bank_best: Option<&GameRecord>) -> String {
    if rank.is_high_score() {
        "🌸 New high score! 🌸".to_string()
    } else if rank.improved {
        format!("New best for this bank. Rank: {}", rank.rank)
    } else {
        let best = bank_best.map_or(0, |g| g.points);
        format!("This bank's best is still {best} points. Rank: {}", rank.rank)
    }
}
