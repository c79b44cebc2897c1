//! Word scoring
//!
//! Points for a word are the sum of three parts:
//! - a length score: `2n - 6` below seven letters, `3n - 9` from seven on
//! - five points per occurrence of the round's special letter
//! - a flat seven points for a pangram (every bank letter used)

use super::Bank;

/// Bonus per occurrence of the special letter
pub const SPECIAL_LETTER_BONUS: u32 = 5;

/// Flat bonus for using all seven bank letters
pub const PANGRAM_BONUS: u32 = 7;

/// Length component of a word's score
///
/// Saturates at zero for lengths below three so the function stays total.
///
/// # Examples
/// ```
/// use blossom_solver::core::base_score;
///
/// assert_eq!(base_score(4), 2);
/// assert_eq!(base_score(6), 6);
/// assert_eq!(base_score(7), 12);
/// assert_eq!(base_score(8), 15);
/// ```
#[inline]
#[must_use]
pub const fn base_score(len: usize) -> u32 {
    let len = len as u32;
    if len < 7 {
        (2 * len).saturating_sub(6)
    } else {
        3 * len - 9
    }
}

/// Check whether a word uses every letter of the bank
#[must_use]
pub fn is_pangram(bank: &Bank, word: &str) -> bool {
    let bytes = word.as_bytes();
    bank.letters().iter().all(|letter| bytes.contains(letter))
}

/// Score a word for a bank with the given special letter
///
/// # Examples
/// ```
/// use blossom_solver::core::{Bank, score_word};
///
/// let bank = Bank::new("reinost").unwrap();
///
/// // 7 letters (12) + pangram (7) + one O (5)
/// assert_eq!(score_word(&bank, b'o', "orients"), 24);
/// ```
#[must_use]
pub fn score_word(bank: &Bank, special: u8, word: &str) -> u32 {
    let specials = word.bytes().filter(|&b| b == special).count() as u32;
    let pangram = if is_pangram(bank, word) { PANGRAM_BONUS } else { 0 };

    base_score(word.len()) + SPECIAL_LETTER_BONUS * specials + pangram
}

/// Highest score a word could reach in any game
///
/// The word's own letters stand in for the bank, so the pangram bonus
/// always applies, and the special letter is its most frequent letter.
/// Used to weed weak words out of the wordlist.
#[must_use]
pub fn max_possible_score(word: &str) -> u32 {
    let mut counts = [0u32; 256];
    for b in word.bytes() {
        counts[usize::from(b)] += 1;
    }
    let best_special = counts.iter().copied().max().unwrap_or(0);

    base_score(word.len()) + SPECIAL_LETTER_BONUS * best_special + PANGRAM_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        Bank::new("reinost").unwrap()
    }

    #[test]
    fn base_score_table() {
        assert_eq!(base_score(4), 2);
        assert_eq!(base_score(5), 4);
        assert_eq!(base_score(6), 6);
        assert_eq!(base_score(7), 12);
        assert_eq!(base_score(8), 15);
        assert_eq!(base_score(9), 18);
    }

    #[test]
    fn base_score_short_words_saturate() {
        assert_eq!(base_score(0), 0);
        assert_eq!(base_score(2), 0);
        assert_eq!(base_score(3), 0);
    }

    #[test]
    fn seven_letter_pangram() {
        let bank = bank();
        assert!(is_pangram(&bank, "orients"));

        // 12 + 7 before any special letter bonus
        assert_eq!(score_word(&bank, b'z', "orients"), 19);
        assert_eq!(score_word(&bank, b'o', "orients"), 19 + SPECIAL_LETTER_BONUS);
        // The special byte is counted wherever it appears, center included
        assert_eq!(score_word(&bank, b'r', "orients"), 24);
    }

    #[test]
    fn long_pangram_with_repeats() {
        let bank = bank();
        // 9 letters (18) + pangram (7) + two Ns (10)
        assert_eq!(score_word(&bank, b'n', "tensioner"), 35);
    }

    #[test]
    fn missing_bank_letters_is_not_pangram() {
        let bank = bank();
        // No E or S; the A does not matter to scoring
        assert!(!is_pangram(&bank, "oration"));
        assert_eq!(score_word(&bank, b'o', "oration"), 12 + 10);
    }

    #[test]
    fn four_letter_plain_word_scores_two() {
        let bank = bank();
        assert_eq!(score_word(&bank, b'e', "riot"), 2);
        assert_eq!(score_word(&bank, b'e', "torn"), 2);
    }

    #[test]
    fn special_letter_counts_every_occurrence() {
        let bank = bank();
        // "titter" has three Ts
        assert_eq!(score_word(&bank, b't', "titter"), 6 + 15);
        assert_eq!(score_word(&bank, b'e', "titter"), 6 + 5);
    }

    #[test]
    fn score_is_deterministic() {
        let bank = bank();
        let a = score_word(&bank, b's', "sorties");
        let b = score_word(&bank, b's', "sorties");
        assert_eq!(a, b);
    }

    #[test]
    fn score_invariant_to_petal_input_order() {
        let a = Bank::new("reinost").unwrap();
        let b = Bank::new("rtsonie").unwrap();
        for word in ["orients", "sorties", "riot", "interior"] {
            for &special in a.petals() {
                assert_eq!(score_word(&a, special, word), score_word(&b, special, word));
            }
        }
    }

    #[test]
    fn max_possible_score_uses_best_letter() {
        // "noon": 2 + pangram of itself 7 + two Ns or two Os (10)
        assert_eq!(max_possible_score("noon"), 19);
        // "riot": 2 + 7 + 5
        assert_eq!(max_possible_score("riot"), 14);
    }
}
