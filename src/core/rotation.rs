//! Special-letter rotation
//!
//! A game lasts twelve rounds. Each round one petal is the special letter,
//! and over a full game every petal is special exactly twice. Two policies
//! exist for moving from one round's letter to the next:
//!
//! - `Advance`: step to the next petal (cyclically, in sorted order) only if
//!   the current special letter was used by the word just played; otherwise
//!   keep it for another round.
//! - `Fixed`: round `r` always uses petal `r % 6`, whatever was played.

use super::{Bank, PETAL_COUNT};

/// Rounds in a full game
pub const ROUNDS: usize = 12;

/// Policy for choosing the next round's special letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    /// Advance only when the special letter was used (default)
    #[default]
    Advance,
    /// Plain round-robin by round index
    Fixed,
}

impl RotationPolicy {
    /// Parse a policy name: "advance" or "fixed"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "advance" => Some(Self::Advance),
            "fixed" | "round-robin" => Some(Self::Fixed),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Fixed => "fixed",
        }
    }

    /// Special letter for round 0
    #[must_use]
    pub fn first_letter(bank: &Bank) -> u8 {
        bank.petals()[0]
    }

    /// Special letter for `next_round`, given the letter of the round just
    /// finished and the word that was played in it
    #[must_use]
    pub fn next_letter(
        self,
        bank: &Bank,
        next_round: usize,
        current: u8,
        last_word: Option<&str>,
    ) -> u8 {
        match self {
            Self::Advance => next_special_letter(bank, current, last_word),
            Self::Fixed => fixed_special_letter(bank, next_round),
        }
    }

    /// Remaining rounds (from `round` through the last one) in which each
    /// petal is expected to be the special letter, indexed like
    /// `bank.petals()`
    ///
    /// Under `Advance` the projection assumes every future word uses its
    /// special letter, so the letter steps once per round from `current`.
    ///
    /// # Examples
    /// ```
    /// use blossom_solver::core::{Bank, RotationPolicy};
    ///
    /// let bank = Bank::new("reinost").unwrap();
    /// let needed = RotationPolicy::Fixed.still_needed(&bank, 0, b'e');
    /// assert_eq!(needed, [2; 6]);
    /// assert_eq!(needed.iter().sum::<usize>(), 12);
    /// ```
    #[must_use]
    pub fn still_needed(self, bank: &Bank, round: usize, current: u8) -> [usize; PETAL_COUNT] {
        let mut needed = [0usize; PETAL_COUNT];
        let mut letter = current;

        for r in round..ROUNDS {
            let active = match self {
                Self::Advance => letter,
                Self::Fixed => fixed_special_letter(bank, r),
            };
            if let Some(i) = bank.petal_index(active) {
                needed[i] += 1;
            }
            letter = next_petal(bank, letter);
        }

        needed
    }
}

/// The petal after `current` in cyclic order
///
/// A letter that is not a petal maps to the first petal.
#[must_use]
pub fn next_petal(bank: &Bank, current: u8) -> u8 {
    let next = bank
        .petal_index(current)
        .map_or(0, |i| (i + 1) % PETAL_COUNT);
    bank.petals()[next]
}

/// Content-sensitive rotation: advance only if `current` occurs in the last
/// played word (or nothing has been played yet)
///
/// # Examples
/// ```
/// use blossom_solver::core::{Bank, next_special_letter};
///
/// let bank = Bank::new("reinost").unwrap();
/// assert_eq!(next_special_letter(&bank, b'e', Some("entire")), b'i');
/// assert_eq!(next_special_letter(&bank, b'e', Some("riot")), b'e');
/// assert_eq!(next_special_letter(&bank, b't', Some("riot")), b'e');
/// ```
#[must_use]
pub fn next_special_letter(bank: &Bank, current: u8, last_word: Option<&str>) -> u8 {
    match last_word {
        Some(word) if !word.as_bytes().contains(&current) => current,
        _ => next_petal(bank, current),
    }
}

/// Round-robin rotation: round `r` uses petal `r % 6`
#[must_use]
pub fn fixed_special_letter(bank: &Bank, round: usize) -> u8 {
    bank.petals()[round % PETAL_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        Bank::new("reinost").unwrap()
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [RotationPolicy::Advance, RotationPolicy::Fixed] {
            assert_eq!(RotationPolicy::from_name(policy.name()), Some(policy));
        }
        assert_eq!(RotationPolicy::from_name("sideways"), None);
        assert_eq!(RotationPolicy::default(), RotationPolicy::Advance);
    }

    #[test]
    fn next_petal_wraps() {
        let bank = bank();
        assert_eq!(next_petal(&bank, b'e'), b'i');
        assert_eq!(next_petal(&bank, b's'), b't');
        assert_eq!(next_petal(&bank, b't'), b'e');
        // Center letter falls back to the first petal
        assert_eq!(next_petal(&bank, b'r'), b'e');
    }

    #[test]
    fn advance_only_when_letter_used() {
        let bank = bank();
        assert_eq!(next_special_letter(&bank, b'o', Some("rooster")), b's');
        assert_eq!(next_special_letter(&bank, b'o', Some("tire")), b'o');
        assert_eq!(next_special_letter(&bank, b'o', None), b's');
    }

    #[test]
    fn fixed_rotation_by_round() {
        let bank = bank();
        let letters: Vec<u8> = (0..ROUNDS).map(|r| fixed_special_letter(&bank, r)).collect();
        assert_eq!(letters, b"einosteinost");
    }

    #[test]
    fn fixed_policy_ignores_word_content() {
        let bank = bank();
        let policy = RotationPolicy::Fixed;
        assert_eq!(policy.next_letter(&bank, 1, b'e', Some("riot")), b'i');
        assert_eq!(policy.next_letter(&bank, 6, b't', Some("riot")), b'e');
    }

    #[test]
    fn still_needed_full_game_is_two_each() {
        let bank = bank();
        for policy in [RotationPolicy::Advance, RotationPolicy::Fixed] {
            let needed = policy.still_needed(&bank, 0, RotationPolicy::first_letter(&bank));
            assert_eq!(needed, [2; PETAL_COUNT], "{}", policy.name());
        }
    }

    #[test]
    fn still_needed_sums_to_remaining_rounds() {
        let bank = bank();
        for policy in [RotationPolicy::Advance, RotationPolicy::Fixed] {
            for round in 0..ROUNDS {
                for &letter in bank.petals() {
                    let needed = policy.still_needed(&bank, round, letter);
                    assert_eq!(needed.iter().sum::<usize>(), ROUNDS - round);
                }
            }
        }
    }

    #[test]
    fn still_needed_advance_walks_from_current() {
        let bank = bank();
        // Round 9 on letter O: O, S, T remain
        let needed = RotationPolicy::Advance.still_needed(&bank, 9, b'o');
        assert_eq!(needed, [0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn still_needed_after_game_is_empty() {
        let bank = bank();
        let needed = RotationPolicy::Advance.still_needed(&bank, ROUNDS, b'e');
        assert_eq!(needed, [0; PETAL_COUNT]);
    }

    #[test]
    fn full_advance_game_uses_each_petal_twice() {
        let bank = bank();
        let mut counts = [0usize; PETAL_COUNT];
        let mut letter = RotationPolicy::first_letter(&bank);
        for round in 0..ROUNDS {
            counts[bank.petal_index(letter).unwrap()] += 1;
            // Every word uses its letter, so the rotation always advances
            let word = [letter; 4];
            let word = std::str::from_utf8(&word).unwrap();
            letter = RotationPolicy::Advance.next_letter(&bank, round + 1, letter, Some(word));
        }
        assert_eq!(counts, [2; PETAL_COUNT]);
    }
}
