//! Runtime settings
//!
//! Gathers the global command-line options (and their environment
//! fallbacks) and owns the file round-trips every front end shares.

use crate::core::RotationPolicy;
use crate::scores::{DEFAULT_SCORES, ScoreBook, timestamp};
use crate::solver::EngineType;
use crate::sync::{commit_and_push, scores_message, wordlist_message};
use crate::wordlists::{DEFAULT_WORDLIST, Dictionary, WordlistChanges, loader};
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownEngine(String),
    UnknownRotation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEngine(name) => {
                write!(f, "Unknown engine '{name}' (expected 'better' or 'greedy')")
            }
            Self::UnknownRotation(name) => {
                write!(f, "Unknown rotation '{name}' (expected 'advance' or 'fixed')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct Settings {
    pub wordlist: PathBuf,
    pub scores: PathBuf,
    pub engine: EngineType,
    pub rotation: RotationPolicy,
    /// Print immediately instead of typing text out
    pub fast: bool,
    /// Commit and push file updates
    pub git: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            scores: PathBuf::from(DEFAULT_SCORES),
            engine: EngineType::default(),
            rotation: RotationPolicy::default(),
            fast: false,
            git: false,
        }
    }
}

impl Settings {
    /// Select the engine by name
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEngine` for an unrecognised name.
    pub fn with_engine(mut self, name: &str) -> Result<Self, ConfigError> {
        self.engine = EngineType::from_name(&name.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownEngine(name.to_string()))?;
        Ok(self)
    }

    /// Select the rotation policy by name
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownRotation` for an unrecognised name.
    pub fn with_rotation(mut self, name: &str) -> Result<Self, ConfigError> {
        self.rotation = RotationPolicy::from_name(&name.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownRotation(name.to_string()))?;
        Ok(self)
    }

    /// Read the wordlist file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        loader::load_from_file(&self.wordlist)
            .with_context(|| format!("Failed to read wordlist {}", self.wordlist.display()))
    }

    /// Read the score book; a missing file gives an empty book
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_scores(&self) -> Result<ScoreBook> {
        ScoreBook::load(&self.scores)
            .with_context(|| format!("Failed to read scores {}", self.scores.display()))
    }

    /// Fold a session's decisions into the wordlist file
    ///
    /// The file is re-read first so edits made since the session started
    /// survive. Returns `false` when there was nothing to write.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written, or if git
    /// sync is enabled and fails.
    pub fn save_changes(&self, changes: &WordlistChanges) -> Result<bool> {
        if changes.is_empty() {
            return Ok(false);
        }

        let mut dictionary = self.load_dictionary()?;
        dictionary.apply(changes);
        loader::save_to_file(&self.wordlist, &dictionary)
            .with_context(|| format!("Failed to write wordlist {}", self.wordlist.display()))?;

        if self.git
            && let Some((summary, body)) = wordlist_message(&self.wordlist, changes, &timestamp())
        {
            commit_and_push(&self.wordlist, &summary, Some(&body))
                .context("Failed to sync wordlist")?;
        }
        Ok(true)
    }

    /// Write the score book
    ///
    /// # Errors
    /// Returns an error if the file cannot be written, or if git sync is
    /// enabled and fails.
    pub fn save_scores(&self, book: &ScoreBook) -> Result<()> {
        book.save(&self.scores)
            .with_context(|| format!("Failed to write scores {}", self.scores.display()))?;

        if self.git {
            let summary = scores_message(&self.scores, &timestamp());
            commit_and_push(&self.scores, &summary, None).context("Failed to sync scores")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GreedyEngine, Planner};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("blossom_config_{}_{name}", std::process::id()))
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.wordlist, PathBuf::from("wordlist.txt"));
        assert_eq!(settings.scores, PathBuf::from("scores.txt"));
        assert_eq!(settings.engine, EngineType::Better(Planner));
        assert_eq!(settings.rotation, RotationPolicy::Advance);
        assert!(!settings.git);
    }

    #[test]
    fn select_by_name() {
        let settings = Settings::default()
            .with_engine("Greedy")
            .unwrap()
            .with_rotation("fixed")
            .unwrap();
        assert_eq!(settings.engine, EngineType::Greedy(GreedyEngine));
        assert_eq!(settings.rotation, RotationPolicy::Fixed);
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            Settings::default().with_engine("minimax").unwrap_err(),
            ConfigError::UnknownEngine("minimax".to_string())
        );
        assert!(Settings::default().with_rotation("spiral").is_err());
    }

    #[test]
    fn save_changes_rewrites_wordlist() {
        let settings = Settings {
            wordlist: temp_path("wordlist.txt"),
            ..Settings::default()
        };
        std::fs::write(&settings.wordlist, "orients.\nriot!\ntonier.\n").unwrap();

        let mut changes = WordlistChanges::default();
        assert!(!settings.save_changes(&changes).unwrap());

        changes.mark_valid("orients");
        changes.mark_invalid("tonier");
        assert!(settings.save_changes(&changes).unwrap());

        let content = std::fs::read_to_string(&settings.wordlist).unwrap();
        std::fs::remove_file(&settings.wordlist).unwrap();
        assert_eq!(content, "orients!\nriot!\n");
    }

    #[test]
    fn missing_wordlist_is_an_error() {
        let settings = Settings {
            wordlist: temp_path("absent.txt"),
            ..Settings::default()
        };
        let err = settings.load_dictionary().unwrap_err();
        assert!(err.to_string().contains("Failed to read wordlist"));
    }
}
