//! Wordlist file format
//!
//! One entry per line: the word followed by `!` when validated or `.` when
//! not, e.g. `orients!` or `trio.`. Lines are kept sorted by word. A bare
//! word without a marker is read as unvalidated.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Parse one wordlist line into `(word, validated)`
///
/// Returns `None` for blank lines and for anything that is not a lowercase
/// alphabetic word.
#[must_use]
pub fn parse_line(line: &str) -> Option<(String, bool)> {
    let trimmed = line.trim();
    let (word, validated) = if let Some(word) = trimmed.strip_suffix('!') {
        (word, true)
    } else if let Some(word) = trimmed.strip_suffix('.') {
        (word, false)
    } else {
        (trimmed, false)
    };

    let word = word.to_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    Some((word, validated))
}

/// Parse a whole wordlist
///
/// # Examples
/// ```
/// use blossom_solver::wordlists::loader::parse_wordlist;
///
/// let dict = parse_wordlist("orients!\ntrio.\n\n");
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.is_validated("orients"), Some(true));
/// assert_eq!(dict.is_validated("trio"), Some(false));
/// ```
#[must_use]
pub fn parse_wordlist(content: &str) -> Dictionary {
    content.lines().filter_map(parse_line).collect()
}

/// Render a dictionary in wordlist format, sorted by word
#[must_use]
pub fn render_wordlist(dictionary: &Dictionary) -> String {
    let mut out = String::with_capacity(dictionary.len() * 10);
    for (word, validated) in dictionary.iter() {
        out.push_str(word);
        out.push(if validated { '!' } else { '.' });
        out.push('\n');
    }
    out
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use blossom_solver::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(parse_wordlist(&content))
}

/// Write a dictionary to a file, replacing its contents
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(path: P, dictionary: &Dictionary) -> io::Result<()> {
    fs::write(path, render_wordlist(dictionary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_markers() {
        assert_eq!(parse_line("riot!"), Some(("riot".to_string(), true)));
        assert_eq!(parse_line("trio."), Some(("trio".to_string(), false)));
        assert_eq!(parse_line("tone"), Some(("tone".to_string(), false)));
        assert_eq!(parse_line("  Stone!\r"), Some(("stone".to_string(), true)));
    }

    #[test]
    fn parse_line_skips_invalid() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("!"), None);
        assert_eq!(parse_line("two words!"), None);
        assert_eq!(parse_line("r2d2."), None);
        assert_eq!(parse_line("café!"), None);
    }

    #[test]
    fn render_is_sorted_with_markers() {
        let dict = parse_wordlist("trio.\norients!\nriot!\n");
        assert_eq!(render_wordlist(&dict), "orients!\nriot!\ntrio.\n");
    }

    #[test]
    fn render_parse_preserves_entries() {
        let text = "orients!\nriot!\nsnorter.\ntrio.\n";
        let dict = parse_wordlist(text);
        assert_eq!(render_wordlist(&dict), text);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "blossom_wordlist_test_{}.txt",
            std::process::id()
        ));

        let dict = parse_wordlist("orients!\ntrio.\n");
        save_to_file(&path, &dict).unwrap();
        let loaded = load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, dict);
    }

    #[test]
    fn load_missing_file_errors() {
        let result = load_from_file("/definitely/not/here/wordlist.txt");
        assert!(result.is_err());
    }
}
