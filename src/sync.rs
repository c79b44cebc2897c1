//! Git sync for the wordlist and score book
//!
//! After a session writes `wordlist.txt` or `scores.txt`, the file can be
//! committed and pushed so several machines share one dictionary. Only
//! used when `--git` is given.

use crate::wordlists::WordlistChanges;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug)]
pub enum SyncError {
    /// `git` could not be started
    Spawn(io::Error),
    /// A git step exited unsuccessfully
    Failed { step: &'static str, stderr: String },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "Failed to run git: {e}"),
            Self::Failed { step, stderr } => {
                write!(f, "git {step} failed")?;
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(e) => Some(e),
            Self::Failed { .. } => None,
        }
    }
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Commit summary and body for a wordlist update, or `None` when nothing
/// changed
#[must_use]
pub fn wordlist_message(
    path: &Path,
    changes: &WordlistChanges,
    timestamp: &str,
) -> Option<(String, String)> {
    if changes.is_empty() {
        return None;
    }

    let validated = changes.validate.len();
    let removed = changes.remove.len();
    let mut actions = Vec::new();
    if validated > 0 {
        actions.push(format!("validated {validated} word{}", plural(validated)));
    }
    if removed > 0 {
        actions.push(format!("removed {removed} word{}", plural(removed)));
    }
    let summary = format!(
        "auto: updated {}: {} at {timestamp}",
        file_label(path),
        actions.join(" and ")
    );

    let mut body = String::new();
    for (heading, words) in [
        ("Validated words:", &changes.validate),
        ("Removed words:", &changes.remove),
    ] {
        if words.is_empty() {
            continue;
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(heading);
        body.push('\n');
        for word in words {
            body.push_str(word);
            body.push('\n');
        }
    }

    Some((summary, body))
}

/// Commit summary for a score book update
#[must_use]
pub fn scores_message(path: &Path, timestamp: &str) -> String {
    format!("auto: updated {} at {timestamp}", file_label(path))
}

fn git(dir: &Path, step: &'static str, args: &[&str]) -> Result<(), SyncError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(SyncError::Spawn)?;

    if output.status.success() {
        Ok(())
    } else {
        Err(SyncError::Failed {
            step,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Stage `path`, commit it, and push to `origin main`
///
/// # Errors
/// Returns `SyncError` if git cannot be run or any step fails.
pub fn commit_and_push(path: &Path, summary: &str, body: Option<&str>) -> Result<(), SyncError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = file_label(path);

    git(dir, "add", &["add", &name])?;
    match body {
        Some(body) => git(dir, "commit", &["commit", "-m", summary, "-m", body])?,
        None => git(dir, "commit", &["commit", "-m", summary])?,
    }
    git(dir, "push", &["push", "origin", "main"])
}
