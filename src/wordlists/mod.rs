//! Word lists for Blossom
//!
//! The dictionary lives in a plain text file that is read once per session
//! and rewritten once at the end with the player's validations and removals.

mod dictionary;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryStats, WordStatus, WordlistChanges};

/// Default wordlist location, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "wordlist.txt";
