//! Legal-play predicates

use super::Bank;

/// Shortest word the game accepts
pub const MIN_WORD_LEN: usize = 4;

/// Check whether a word is a legal play for a bank
///
/// A legal word has at least four letters, uses only bank letters
/// (repeats allowed) and contains the center letter.
///
/// # Examples
/// ```
/// use blossom_solver::core::{Bank, is_legal};
///
/// let bank = Bank::new("reinost").unwrap();
/// assert!(is_legal(&bank, "riot"));
/// assert!(!is_legal(&bank, "tone")); // no center letter
/// assert!(!is_legal(&bank, "rot")); // too short
/// assert!(!is_legal(&bank, "roast")); // A is not in the bank
/// ```
#[must_use]
pub fn is_legal(bank: &Bank, word: &str) -> bool {
    word.len() >= MIN_WORD_LEN
        && word.bytes().all(|b| bank.contains(b))
        && word.bytes().any(|b| b == bank.center())
}

/// Check whether a word is legal and has not been played this session
#[must_use]
pub fn is_playable<S: AsRef<str>>(bank: &Bank, played: &[S], word: &str) -> bool {
    is_legal(bank, word) && !played.iter().any(|p| p.as_ref() == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        Bank::new("reinost").unwrap()
    }

    #[test]
    fn legal_words_accepted() {
        let bank = bank();
        for word in ["riot", "orients", "sorties", "rrrr", "interior"] {
            assert!(is_legal(&bank, word), "{word} should be legal");
        }
    }

    #[test]
    fn rejects_short_words_even_with_center() {
        let bank = bank();
        assert!(!is_legal(&bank, ""));
        assert!(!is_legal(&bank, "r"));
        assert!(!is_legal(&bank, "ore"));
    }

    #[test]
    fn rejects_letters_outside_bank() {
        let bank = bank();
        assert!(!is_legal(&bank, "roast"));
        assert!(!is_legal(&bank, "ratio"));
        assert!(!is_legal(&bank, "Riot"));
    }

    #[test]
    fn rejects_missing_center_regardless_of_length() {
        let bank = bank();
        assert!(!is_legal(&bank, "tone"));
        assert!(!is_legal(&bank, "sonnets"));
        assert!(!is_legal(&bank, "noisiest"));
    }

    #[test]
    fn playable_excludes_history() {
        let bank = bank();
        let played = vec!["riot".to_string()];
        assert!(!is_playable(&bank, &played, "riot"));
        assert!(is_playable(&bank, &played, "trio"));
        assert!(!is_playable(&bank, &played, "tone"));
    }
}
