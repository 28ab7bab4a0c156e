//! Announcement of newly added notes to an MS Teams channel
//!
//! Added notes are summarised (title plus a short excerpt), rendered as a
//! markdown list and posted to an incoming webhook inside an Adaptive Card.

pub mod card;
pub mod webhook;

pub use card::{TeamsMessage, prepare_payload};
pub use webhook::TeamsNotifier;

use crate::error::{IndexingError, TilError};
use crate::indexer::extract_title;
use crate::paths::file_stem;
use std::path::Path;

/// Placeholder appended to an excerpt that had to be cut
pub const PLACEHOLDER: &str = "...";

/// A note as it appears in a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    /// Relative `/`-separated path of the note
    pub path: String,
    pub title: String,
    pub excerpt: String,
}

/// Collapse whitespace and fit `text` into `width` characters.
///
/// Whole words are kept; when the text has to be cut, `placeholder` is
/// appended and counts towards the width.
///
/// # Examples
///
/// ```
/// use til_index::notify::shorten;
///
/// assert_eq!(shorten("Hello  \n world", 20, "..."), "Hello world");
/// assert_eq!(shorten("Hello there world again", 15, "..."), "Hello there...");
/// ```
pub fn shorten(text: &str, width: usize, placeholder: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(placeholder.chars().count());
    let mut shortened = String::new();
    let mut len = 0;
    for word in words {
        let separator = usize::from(!shortened.is_empty());
        let word_len = word.chars().count();
        if len + separator + word_len > budget {
            break;
        }
        if separator == 1 {
            shortened.push(' ');
        }
        shortened.push_str(word);
        len += separator + word_len;
    }

    shortened.push_str(placeholder);
    shortened
}

/// Summarise note content: the title, then an excerpt built from the
/// `excerpt_chars` characters following the first line.
pub fn summarize(
    path: &str,
    content: &str,
    excerpt_chars: usize,
    excerpt_width: usize,
) -> NoteSummary {
    let title = extract_title(content, file_stem(path));
    let rest = content.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    let head: String = rest.chars().take(excerpt_chars).collect();

    NoteSummary {
        path: path.to_string(),
        title,
        excerpt: shorten(&head, excerpt_width, PLACEHOLDER),
    }
}

/// Read and summarise the note at `root/path`
pub fn read_summary(
    root: &Path,
    path: &str,
    excerpt_chars: usize,
    excerpt_width: usize,
) -> Result<NoteSummary, TilError> {
    let full_path = root.join(path);
    let content = std::fs::read_to_string(&full_path).map_err(|e| IndexingError::FileReadFailed {
        file: full_path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(summarize(path, &content, excerpt_chars, excerpt_width))
}

/// Web link to a note on the repository host
pub fn note_url(repo_url: &str, branch: &str, path: &str) -> String {
    format!("{}/blob/{}/{}", repo_url.trim_end_matches('/'), branch, path)
}

/// Markdown list of notes, each linked and followed by its indented excerpt
pub fn files_markdown(repo_url: &str, branch: &str, notes: &[NoteSummary]) -> String {
    notes
        .iter()
        .map(|note| {
            format!(
                "- [{}]({})\n  {}\n",
                note.title,
                note_url(repo_url, branch, &note.path),
                note.excerpt
            )
        })
        .collect()
}
