//! A single TIL note and its title extraction

use super::topic::{TopicKey, deslugify};
use crate::paths::file_stem;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// A markdown note discovered in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Path relative to the repository root, `/`-separated
    pub relative_path: String,
    /// Topic derived from the folders containing the note
    pub topic: TopicKey,
    /// Display title
    pub title: String,
    /// Date of the commit that first introduced the note, if committed
    pub created: Option<NaiveDate>,
}

impl Note {
    /// Whether the note's file name starts with an underscore
    pub fn is_sticky(&self) -> bool {
        file_stem(&self.relative_path).starts_with('_')
    }

    /// Index ordering: sticky notes first, then by title, then by path
    pub fn index_order(&self, other: &Self) -> Ordering {
        other
            .is_sticky()
            .cmp(&self.is_sticky())
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.relative_path.cmp(&other.relative_path))
    }
}

/// Extract the text of a markdown heading line, or `None` for any other line.
///
/// # Examples
///
/// ```
/// use til_index::indexer::heading_text;
///
/// assert_eq!(heading_text("## Channels  "), Some("Channels"));
/// assert_eq!(heading_text("#"), Some(""));
/// assert_eq!(heading_text("plain text"), None);
/// ```
pub fn heading_text(line: &str) -> Option<&str> {
    let stripped = line.trim_start_matches('#');
    if stripped.len() == line.len() {
        None
    } else {
        Some(stripped.trim())
    }
}

/// Derive a note title from its content and file stem.
///
/// The first line is used when it is a non-empty heading; otherwise the title
/// falls back to the deslugified file stem.
pub fn extract_title(content: &str, stem: &str) -> String {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let first_line = content.lines().next().unwrap_or_default();

    match heading_text(first_line) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => deslugify(stem),
    }
}
