//! Search command
//!
//! Looks words up in the wordlist and can add or validate them.

use crate::wordlists::{Dictionary, WordStatus, WordlistChanges};

/// Result of a wordlist search
#[derive(Debug)]
pub struct SearchResult {
    /// Queries in the order given, with their status
    pub entries: Vec<(String, WordStatus)>,
}

impl SearchResult {
    /// Whether any query is missing or unvalidated
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, status)| *status != WordStatus::Validated)
    }

    /// Changes that add or validate every query
    #[must_use]
    pub fn validate_all(&self) -> WordlistChanges {
        let mut changes = WordlistChanges::default();
        for (word, status) in &self.entries {
            if *status != WordStatus::Validated {
                changes.mark_valid(word);
            }
        }
        changes
    }
}

/// Split raw arguments on commas and whitespace into lowercase queries,
/// dropping duplicates
#[must_use]
pub fn parse_queries(inputs: &[String]) -> Vec<String> {
    let mut queries: Vec<String> = Vec::new();
    for word in inputs
        .iter()
        .flat_map(|s| s.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
    {
        if !queries.contains(&word) {
            queries.push(word);
        }
    }
    queries
}

/// Look up each query
///
/// # Errors
///
/// Returns an error if no query is given or a query is not alphabetic.
pub fn search_words(inputs: &[String], dictionary: &Dictionary) -> Result<SearchResult, String> {
    let queries = parse_queries(inputs);
    if queries.is_empty() {
        return Err("No words to search".to_string());
    }
    if let Some(bad) = queries
        .iter()
        .find(|q| !q.bytes().all(|b| b.is_ascii_lowercase()))
    {
        return Err(format!("Invalid word '{bad}'"));
    }

    let entries = dictionary
        .search(&queries)
        .into_iter()
        .map(|(word, status)| (word.to_string(), status))
        .collect();

    Ok(SearchResult { entries })
}
