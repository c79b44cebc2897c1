//! Blossom letter bank
//!
//! A bank is seven distinct letters. The first one is the center letter,
//! the remaining six are petals and are kept sorted so the special-letter
//! rotation is stable no matter how the player typed them.

use std::fmt;

/// Number of letters in a bank
pub const BANK_SIZE: usize = 7;

/// Number of petal letters (everything except the center)
pub const PETAL_COUNT: usize = BANK_SIZE - 1;

/// A validated seven-letter bank, center letter first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bank {
    letters: [u8; BANK_SIZE],
}

/// Error type for invalid banks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    InvalidLength(usize),
    NonAlphabetic,
    DuplicateLetter(char),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Bank must be exactly {BANK_SIZE} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Bank must contain only ASCII letters"),
            Self::DuplicateLetter(c) => write!(f, "Bank letters must be unique, '{c}' repeats"),
        }
    }
}

impl std::error::Error for BankError {}

impl Bank {
    /// Create a bank from player input (center letter first)
    ///
    /// Input is case-insensitive. Petals are sorted; the center stays first.
    ///
    /// # Errors
    /// Returns `BankError` if the input is not seven distinct ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use blossom_solver::core::Bank;
    ///
    /// let bank = Bank::new("RTSONIE").unwrap();
    /// assert_eq!(bank.center(), b'r');
    /// assert_eq!(bank.petals(), b"einost");
    /// assert_eq!(bank.to_string(), "reinost");
    ///
    /// assert!(Bank::new("abc").is_err());
    /// assert!(Bank::new("aabcdef").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, BankError> {
        let text = text.trim().to_lowercase();

        let len = text.chars().count();
        if len != BANK_SIZE {
            return Err(BankError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(BankError::NonAlphabetic);
        }

        let mut letters = [0u8; BANK_SIZE];
        letters.copy_from_slice(text.as_bytes());

        let mut seen = [false; 26];
        for &letter in &letters {
            let slot = &mut seen[usize::from(letter - b'a')];
            if *slot {
                return Err(BankError::DuplicateLetter(char::from(letter)));
            }
            *slot = true;
        }

        letters[1..].sort_unstable();

        Ok(Self { letters })
    }

    /// The center letter, required in every legal word
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.letters[0]
    }

    /// The six petal letters in sorted order
    #[inline]
    #[must_use]
    pub fn petals(&self) -> &[u8] {
        &self.letters[1..]
    }

    /// All seven letters, center first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; BANK_SIZE] {
        &self.letters
    }

    /// Check whether a letter belongs to the bank
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Position of a petal within `petals()`, or `None` for the center or
    /// a letter outside the bank
    #[must_use]
    pub fn petal_index(&self, letter: u8) -> Option<usize> {
        self.petals().iter().position(|&p| p == letter)
    }

    /// Bank formatted the way the score book stores it, e.g. `REINOST`
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Bank {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
