//! In-memory dictionary of known words
//!
//! Every entry carries a `validated` flag: `true` once a human has
//! confirmed the word is accepted by the game. Unvalidated entries are
//! provisional; the engine may still propose them, but the player has to
//! confirm them.

use crate::core::{BANK_SIZE, Bank, max_possible_score};
use std::collections::{BTreeMap, BTreeSet};

/// Known status of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    Missing,
    Unvalidated,
    Validated,
}

impl WordStatus {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Missing => "Not found",
            Self::Unvalidated => "Present, not validated",
            Self::Validated => "Validated",
        }
    }
}

/// Word → validated map with sorted, deterministic iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, bool>,
}

/// Validation and removal decisions gathered during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordlistChanges {
    pub validate: BTreeSet<String>,
    pub remove: BTreeSet<String>,
}

impl WordlistChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validate.is_empty() && self.remove.is_empty()
    }

    /// Record a word the player confirmed
    pub fn mark_valid(&mut self, word: &str) {
        self.remove.remove(word);
        self.validate.insert(word.to_string());
    }

    /// Record a word the game refused
    pub fn mark_invalid(&mut self, word: &str) {
        self.validate.remove(word);
        self.remove.insert(word.to_string());
    }

    /// Fold another session's decisions into this one
    pub fn merge(&mut self, other: Self) {
        for word in other.validate {
            self.mark_valid(&word);
        }
        for word in other.remove {
            self.mark_invalid(&word);
        }
    }
}

/// Aggregate counts shown by the `stats` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    pub total: usize,
    pub validated: usize,
    pub pangrams: usize,
    pub validated_pangrams: usize,
    pub longest_validated: Option<String>,
}

/// Number of distinct letters in a word
fn distinct_letters(word: &str) -> usize {
    word.bytes().collect::<BTreeSet<u8>>().len()
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// `Some(validated)` for a known word, `None` otherwise
    #[must_use]
    pub fn is_validated(&self, word: &str) -> Option<bool> {
        self.entries.get(word).copied()
    }

    #[must_use]
    pub fn status(&self, word: &str) -> WordStatus {
        match self.entries.get(word) {
            None => WordStatus::Missing,
            Some(false) => WordStatus::Unvalidated,
            Some(true) => WordStatus::Validated,
        }
    }

    /// Entries in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(w, &v)| (w.as_str(), v))
    }

    /// Words in alphabetical order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries usable with a bank: center letter present, bank letters only
    ///
    /// Minimum length is left to the legality check.
    #[must_use]
    pub fn for_bank(&self, bank: &Bank) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(word, _)| {
                word.bytes().any(|b| b == bank.center()) && word.bytes().all(|b| bank.contains(b))
            })
            .map(|(w, &v)| (w.clone(), v))
            .collect();
        Self { entries }
    }

    /// Apply a session's decisions
    ///
    /// Validated words are flagged (and added if unknown); removed words are
    /// dropped. Removal wins if a word appears in both sets.
    pub fn apply(&mut self, changes: &WordlistChanges) {
        for word in &changes.validate {
            self.entries.insert(word.clone(), true);
        }
        for word in &changes.remove {
            self.entries.remove(word);
        }
    }

    /// Look up several words at once
    #[must_use]
    pub fn search<'q>(&self, queries: &'q [String]) -> Vec<(&'q str, WordStatus)> {
        queries
            .iter()
            .map(|q| (q.as_str(), self.status(q)))
            .collect()
    }

    /// Words whose best achievable score is below `threshold`
    #[must_use]
    pub fn weak_words(&self, threshold: u32) -> Vec<String> {
        self.words()
            .filter(|word| max_possible_score(word) < threshold)
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> DictionaryStats {
        let is_pangram = |word: &str| distinct_letters(word) == BANK_SIZE;

        let validated = self.iter().filter(|&(_, v)| v).count();
        let pangrams = self.words().filter(|w| is_pangram(w)).count();
        let validated_pangrams = self.iter().filter(|&(w, v)| v && is_pangram(w)).count();

        // First longest in alphabetical order
        let longest_validated = self
            .iter()
            .filter(|&(_, v)| v)
            .map(|(w, _)| w)
            .fold(None::<&str>, |best, w| match best {
                Some(b) if b.len() >= w.len() => Some(b),
                _ => Some(w),
            })
            .map(str::to_string);

        DictionaryStats {
            total: self.len(),
            validated,
            pangrams,
            validated_pangrams,
            longest_validated,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(w, v)| (w.into(), v)).collect(),
        }
    }
}
