//! Core domain types for Blossom
//!
//! The bank, the scoring function, the legality predicate and the
//! special-letter rotation. Everything here is pure and deterministic.

mod bank;
mod legality;
mod rotation;
mod score;

pub use bank::{BANK_SIZE, Bank, BankError, PETAL_COUNT};
pub use legality::{MIN_WORD_LEN, is_legal, is_playable};
pub use rotation::{
    ROUNDS, RotationPolicy, fixed_special_letter, next_petal, next_special_letter,
};
pub use score::{
    PANGRAM_BONUS, SPECIAL_LETTER_BONUS, base_score, is_pangram, max_possible_score, score_word,
};
