//! Stats command
//!
//! Wordlist coverage and the score book's records.

use crate::scores::{GameRecord, ScoreBook, WordRecord};
use crate::wordlists::{Dictionary, DictionaryStats};

/// Number of game records shown by default
pub const TOP_SCORES: usize = 10;

/// Wordlist and score book statistics
#[derive(Debug)]
pub struct StatsResult {
    pub dictionary: DictionaryStats,
    pub best_word: Option<WordRecord>,
    pub banks_played: usize,
    pub top: Vec<GameRecord>,
}

impl StatsResult {
    /// Share of words that are validated, in percent
    #[must_use]
    pub fn validated_pct(&self) -> f64 {
        percent(self.dictionary.validated, self.dictionary.total)
    }

    /// Share of pangrams that are validated, in percent
    #[must_use]
    pub fn validated_pangram_pct(&self) -> f64 {
        percent(self.dictionary.validated_pangrams, self.dictionary.pangrams)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Gather statistics, keeping the `top` best game records
#[must_use]
pub fn collect_stats(dictionary: &Dictionary, book: &ScoreBook, top: usize) -> StatsResult {
    StatsResult {
        dictionary: dictionary.stats(),
        best_word: book.best_word().cloned(),
        banks_played: book.games().len(),
        top: book.top(top).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_combine_sources() {
        let dict: Dictionary = [
            ("orients", true),
            ("tensioner", false),
            ("riot", true),
            ("trio", false),
        ]
        .into_iter()
        .collect();
        let book =
            ScoreBook::parse("orients e 24\nREINOST 300 2025-01-01\nAEINPRT 250 2025-01-02\n")
                .unwrap();

        let stats = collect_stats(&dict, &book, 1);
        assert_eq!(stats.dictionary.total, 4);
        assert!((stats.validated_pct() - 50.0).abs() < 1e-9);
        assert!((stats.validated_pangram_pct() - 50.0).abs() < 1e-9);
        assert_eq!(stats.best_word.unwrap().points, 24);
        assert_eq!(stats.banks_played, 2);
        assert_eq!(stats.top.len(), 1);
        assert_eq!(stats.top[0].bank, "REINOST");
    }

    #[test]
    fn empty_sources() {
        let stats = collect_stats(&Dictionary::new(), &ScoreBook::default(), TOP_SCORES);
        assert!(stats.validated_pct().abs() < f64::EPSILON);
        assert!(stats.best_word.is_none());
        assert!(stats.top.is_empty());
    }
}
