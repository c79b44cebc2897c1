//! Prune command
//!
//! Removes words that can never score well in any bank.

use crate::wordlists::{Dictionary, WordlistChanges};

/// Words whose best possible score is below this are dropped by default
pub const DEFAULT_PRUNE_THRESHOLD: u32 = 15;

/// Result of pruning the wordlist
#[derive(Debug)]
pub struct PruneResult {
    pub threshold: u32,
    pub removed: Vec<String>,
    pub remaining: usize,
}

impl PruneResult {
    /// Removals in wordlist-update form
    #[must_use]
    pub fn changes(&self) -> WordlistChanges {
        let mut changes = WordlistChanges::default();
        for word in &self.removed {
            changes.mark_invalid(word);
        }
        changes
    }
}

/// Work out which words fall below `threshold`
#[must_use]
pub fn prune_weak_words(dictionary: &Dictionary, threshold: u32) -> PruneResult {
    let removed = dictionary.weak_words(threshold);
    PruneResult {
        threshold,
        remaining: dictionary.len() - removed.len(),
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::max_possible_score;

    #[test]
    fn prunes_below_threshold() {
        let dict: Dictionary = [("riot", true), ("noon", true), ("orients", true), ("tone", false)]
            .into_iter()
            .collect();
        let result = prune_weak_words(&dict, DEFAULT_PRUNE_THRESHOLD);

        // riot and tone top out at 14, noon reaches 19 with a doubled letter
        assert_eq!(result.removed, ["riot", "tone"]);
        assert_eq!(result.remaining, 2);
        assert!(result.removed.iter().all(|w| max_possible_score(w) < 15));

        let mut pruned = dict.clone();
        pruned.apply(&result.changes());
        assert_eq!(pruned.len(), 2);
        assert!(pruned.contains("noon"));
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        let dict: Dictionary = [("riot", true)].into_iter().collect();
        let result = prune_weak_words(&dict, 0);
        assert!(result.removed.is_empty());
        assert!(result.changes().is_empty());
    }
}
