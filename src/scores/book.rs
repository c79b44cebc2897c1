//! Score book persistence
//!
//! `scores.txt` holds the best single word on its first line, then one line
//! per bank with the best game total for it, highest first:
//!
//! ```text
//! tensioner n 35
//! REINOST 579 2025-03-02
//! TEILNRS 578 2025-02-11
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Placeholder on the first line before any word has been recorded
const NO_WORD: &str = "-";

/// Best single word ever played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub letter: char,
    pub points: u32,
}

/// Best game total for a bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Bank label, e.g. `REINOST`
    pub bank: String,
    pub points: u32,
    /// `YYYY-MM-DD`
    pub date: String,
}

/// Where a finished game landed in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRank {
    /// 1-based rank of the game's total among all banks
    pub rank: usize,
    /// Whether the game beat the previous best for its bank
    pub improved: bool,
}

impl GameRank {
    /// Top of the book with a new record, not a lower replay of the top bank
    #[must_use]
    pub const fn is_high_score(self) -> bool {
        self.improved && self.rank == 1
    }
}

#[derive(Debug)]
pub enum ScoreBookError {
    Io(io::Error),
    Malformed { line: usize, content: String },
}

impl fmt::Display for ScoreBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Score book I/O error: {e}"),
            Self::Malformed { line, content } => {
                write!(f, "Malformed score book line {line}: '{content}'")
            }
        }
    }
}

impl std::error::Error for ScoreBookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for ScoreBookError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Word and game high scores
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBook {
    best_word: Option<WordRecord>,
    games: Vec<GameRecord>,
}

fn parse_word_line(line: &str) -> Option<WordRecord> {
    let mut parts = line.split_whitespace();
    let word = parts.next()?.to_string();
    let mut letter_chars = parts.next()?.chars();
    let letter = letter_chars.next()?.to_ascii_lowercase();
    if letter_chars.next().is_some() {
        return None;
    }
    let points = parts.next()?.parse().ok()?;
    Some(WordRecord {
        word,
        letter,
        points,
    })
}

fn parse_game_line(line: &str) -> Option<GameRecord> {
    let mut parts = line.split_whitespace();
    let bank = parts.next()?.to_uppercase();
    let points = parts.next()?.parse().ok()?;
    let date = parts.next().unwrap_or_default().to_string();
    Some(GameRecord { bank, points, date })
}

impl ScoreBook {
    /// Parse score book text
    ///
    /// # Errors
    /// Returns `ScoreBookError::Malformed` for a line that cannot be read.
    pub fn parse(content: &str) -> Result<Self, ScoreBookError> {
        let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let best_word = match lines.next() {
            None => return Ok(Self::default()),
            Some((_, line)) if line.split_whitespace().next() == Some(NO_WORD) => None,
            Some((i, line)) => Some(parse_word_line(line).ok_or_else(|| {
                ScoreBookError::Malformed {
                    line: i + 1,
                    content: line.to_string(),
                }
            })?),
        };

        let mut games = Vec::new();
        for (i, line) in lines {
            let record = parse_game_line(line).ok_or_else(|| ScoreBookError::Malformed {
                line: i + 1,
                content: line.to_string(),
            })?;
            games.push(record);
        }
        games.sort_by(|a, b| b.points.cmp(&a.points));

        Ok(Self { best_word, games })
    }

    /// Render in file format
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        match &self.best_word {
            Some(w) => out.push_str(&format!("{} {} {}\n", w.word, w.letter, w.points)),
            None => out.push_str(&format!("{NO_WORD} {NO_WORD} 0\n")),
        }
        for g in &self.games {
            out.push_str(&format!("{} {} {}\n", g.bank, g.points, g.date));
        }
        out
    }

    /// Load from a file; a missing file gives an empty book
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScoreBookError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a file, replacing its contents
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScoreBookError> {
        fs::write(path, self.render())?;
        Ok(())
    }

    #[must_use]
    pub const fn best_word(&self) -> Option<&WordRecord> {
        self.best_word.as_ref()
    }

    /// All game records, highest first
    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// Top `n` game records
    #[must_use]
    pub fn top(&self, n: usize) -> &[GameRecord] {
        &self.games[..n.min(self.games.len())]
    }

    /// Best recorded total for a bank label
    #[must_use]
    pub fn best_for(&self, bank: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.bank == bank)
    }

    /// Record a played word; returns `true` for a new word high score
    pub fn record_word(&mut self, word: &str, letter: u8, points: u32) -> bool {
        if self.best_word.as_ref().is_some_and(|w| w.points >= points) {
            return false;
        }
        self.best_word = Some(WordRecord {
            word: word.to_string(),
            letter: char::from(letter),
            points,
        });
        true
    }

    /// Record a finished game and report its rank
    ///
    /// Only the best total per bank is kept. The rank is where this game's
    /// total falls among the other banks' bests, whether or not it replaced
    /// the bank's previous best.
    pub fn record_game(&mut self, bank: &str, points: u32, date: &str) -> GameRank {
        let bank = bank.to_uppercase();
        let rank = 1 + self
            .games
            .iter()
            .filter(|g| g.bank != bank && g.points > points)
            .count();

        let existing = self.games.iter().position(|g| g.bank == bank);
        let improved = match existing {
            Some(i) if self.games[i].points >= points => false,
            Some(i) => {
                self.games[i].points = points;
                self.games[i].date = date.to_string();
                true
            }
            None => {
                self.games.push(GameRecord {
                    bank,
                    points,
                    date: date.to_string(),
                });
                true
            }
        };
        self.games.sort_by(|a, b| b.points.cmp(&a.points));

        GameRank { rank, improved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "tensioner n 35\nTEILNRS 578 2025-02-11\nREINOST 579 2025-03-02\n";

    #[test]
    fn parse_sorts_games() {
        let book = ScoreBook::parse(SAMPLE).unwrap();
        let best = book.best_word().unwrap();
        assert_eq!(best.word, "tensioner");
        assert_eq!(best.letter, 'n');
        assert_eq!(best.points, 35);

        let banks: Vec<&str> = book.games().iter().map(|g| g.bank.as_str()).collect();
        assert_eq!(banks, ["REINOST", "TEILNRS"]);
    }

    #[test]
    fn parse_empty_is_default() {
        assert_eq!(ScoreBook::parse("").unwrap(), ScoreBook::default());
        assert_eq!(ScoreBook::parse("\n\n").unwrap(), ScoreBook::default());
    }

    #[test]
    fn render_empty_book_with_games() {
        let mut book = ScoreBook::default();
        book.record_game("reinost", 300, "2025-01-01");
        let text = book.render();
        assert_eq!(text, "- - 0\nREINOST 300 2025-01-01\n");
        assert_eq!(ScoreBook::parse(&text).unwrap(), book);
    }

    #[test]
    fn parse_malformed_reports_line() {
        let err = ScoreBook::parse("tensioner n 35\nREINOST lots\n").unwrap_err();
        assert!(matches!(err, ScoreBookError::Malformed { line: 2, .. }));

        let err = ScoreBook::parse("tensioner 35\n").unwrap_err();
        assert!(matches!(err, ScoreBookError::Malformed { line: 1, .. }));
    }

    #[test]
    fn render_parse_preserves_book() {
        let book = ScoreBook::parse(SAMPLE).unwrap();
        assert_eq!(ScoreBook::parse(&book.render()).unwrap(), book);
    }

    #[test]
    fn record_word_only_on_improvement() {
        let mut book = ScoreBook::default();
        assert!(book.record_word("riot", b'o', 7));
        assert!(!book.record_word("trio", b'o', 7));
        assert!(book.record_word("rooster", b'o', 22));
        assert_eq!(book.best_word().unwrap().word, "rooster");
    }

    #[test]
    fn record_game_new_bank() {
        let mut book = ScoreBook::parse(SAMPLE).unwrap();
        let rank = book.record_game("enostux", 400, "2025-04-01");
        assert_eq!(rank, GameRank { rank: 3, improved: true });
        assert_eq!(book.games().len(), 3);
        assert_eq!(book.games()[2].bank, "ENOSTUX");
    }

    #[test]
    fn record_game_new_high_score() {
        let mut book = ScoreBook::parse(SAMPLE).unwrap();
        let rank = book.record_game("TEILNRS", 600, "2025-04-01");
        assert_eq!(rank, GameRank { rank: 1, improved: true });
        assert_eq!(book.games()[0].bank, "TEILNRS");
        assert_eq!(book.games()[0].date, "2025-04-01");
        assert_eq!(book.games().len(), 2);
    }

    #[test]
    fn record_game_keeps_previous_best() {
        let mut book = ScoreBook::parse(SAMPLE).unwrap();
        let rank = book.record_game("REINOST", 500, "2025-04-01");
        assert_eq!(rank, GameRank { rank: 2, improved: false });
        assert_eq!(book.best_for("REINOST").unwrap().points, 579);
    }

    #[test]
    fn lower_replay_of_top_bank_is_not_high_score() {
        let mut book = ScoreBook::parse(SAMPLE).unwrap();
        // Ranked only against other banks, so a weak replay still lands first
        let rank = book.record_game("REINOST", 0, "2025-04-01");
        assert_eq!(rank, GameRank { rank: 1, improved: false });
        assert!(!rank.is_high_score());
        assert_eq!(book.best_for("REINOST").unwrap().points, 579);

        assert!(book.record_game("REINOST", 580, "2025-04-02").is_high_score());
    }

    #[test]
    fn top_clamps() {
        let book = ScoreBook::parse(SAMPLE).unwrap();
        assert_eq!(book.top(1).len(), 1);
        assert_eq!(book.top(10).len(), 2);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let book = ScoreBook::load("/definitely/not/here/scores.txt").unwrap();
        assert_eq!(book, ScoreBook::default());
    }

    #[test]
    fn file_round_trip() {
        let path =
            std::env::temp_dir().join(format!("blossom_scores_test_{}.txt", std::process::id()));
        let book = ScoreBook::parse(SAMPLE).unwrap();
        book.save(&path).unwrap();
        let loaded = ScoreBook::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, book);
    }
}
