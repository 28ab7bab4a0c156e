//! Note discovery, title extraction and topic grouping
//!
//! Walks the note tree, derives each note's topic from its folders and builds
//! the [`Grouping`] both rendered fragments are produced from.

mod grouping;
mod note;
mod note_walker;
mod topic;

pub use grouping::{Grouping, Topic};
pub use note::{Note, extract_title, heading_text};
pub use note_walker::{NoteFile, NoteWalker};
pub use topic::{TopicKey, TopicSegment, deslugify};

use crate::error::TilError;
use crate::git::CreatedTimes;
use crate::paths::file_stem;

/// Turn a discovered file into a note
pub fn load_note(file: &NoteFile, created_times: &CreatedTimes) -> Result<Note, TilError> {
    let content = file.read()?;

    Ok(Note {
        relative_path: file.relative_path.clone(),
        topic: TopicKey::from_slugs(file.folders()),
        title: extract_title(&content, file_stem(file.file_name())),
        created: created_times.get(&file.relative_path).copied(),
    })
}

/// Walk the notes and group them by topic, synthesizing missing parent topics.
///
/// Any unreadable note aborts the run.
pub fn index_topics(walker: &NoteWalker, created_times: &CreatedTimes) -> Result<Grouping, TilError> {
    let files = walker.walk()?;

    let mut grouping = Grouping::new();
    for file in &files {
        let note = load_note(file, created_times)?;
        if note.created.is_none() {
            tracing::debug!("No commit date for {}", note.relative_path);
        }
        grouping.insert(note);
    }
    grouping.fill_missing_topics();

    tracing::info!(
        "Indexed {} notes into {} topics",
        grouping.note_count(),
        grouping.len()
    );
    Ok(grouping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_note() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go/channels.md", "# Channels\nBody...");

        let mut created = CreatedTimes::new();
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        created.insert("go/channels.md".to_string(), date);

        let files = NoteWalker::new(temp_dir.path()).walk().unwrap();
        let note = load_note(&files[0], &created).unwrap();

        assert_eq!(note.title, "Channels");
        assert_eq!(note.topic, TopicKey::from_slugs(["go"]));
        assert_eq!(note.created, Some(date));
    }

    #[test]
    fn test_index_topics_groups_and_fills() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "go/concurrency/channels/buffered.md", "# Buffered");
        write(temp_dir.path(), "python/testing/fixtures.md", "");
        write(temp_dir.path(), "README.md", "# TIL");

        let walker = NoteWalker::new(temp_dir.path());
        let grouping = index_topics(&walker, &CreatedTimes::new()).unwrap();

        assert_eq!(grouping.note_count(), 2);
        assert!(grouping.contains(&TopicKey::from_slugs(["go"])));
        assert!(grouping.contains(&TopicKey::from_slugs(["go", "concurrency"])));
        assert!(grouping.contains(&TopicKey::from_slugs(["python"])));

        let testing = grouping
            .get(&TopicKey::from_slugs(["python", "testing"]))
            .unwrap();
        let fixtures = &testing.notes["python/testing/fixtures.md"];
        assert_eq!(fixtures.title, "Fixtures");
        assert_eq!(fixtures.created, None);
    }

    #[test]
    fn test_index_topics_missing_root() {
        let walker = NoteWalker::new("/nonexistent/til/root");
        assert!(index_topics(&walker, &CreatedTimes::new()).is_err());
    }
}
