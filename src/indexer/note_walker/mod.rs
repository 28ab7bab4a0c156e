//! Directory traversal for note discovery

use crate::error::{IndexingError, TilError};
use crate::glob_utils::{compile_patterns, matches_any};
use crate::paths::{is_hidden, path_segments};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A markdown file eligible for the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    /// Absolute (root-joined) path on disk
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated
    pub relative_path: String,
    /// Relative path split into segments; the last one is the file name
    pub segments: Vec<String>,
}

impl NoteFile {
    /// Folder segments, i.e. everything but the file name
    pub fn folders(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Read the note as UTF-8 text
    pub fn read(&self) -> Result<String, TilError> {
        fs::read_to_string(&self.path).map_err(|e| {
            IndexingError::FileReadFailed {
                file: self.relative_path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

pub struct NoteWalker {
    pub(crate) root: PathBuf,
    pub(crate) readme_name: String,
    pub(crate) exclude_patterns: Vec<String>,
}

impl NoteWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            readme_name: "README.md".to_string(),
            exclude_patterns: vec![],
        }
    }

    /// File name of the root document; files with this name are skipped anywhere
    pub fn with_readme_name(mut self, readme_name: impl Into<String>) -> Self {
        self.readme_name = readme_name.into();
        self
    }

    pub fn with_exclude_patterns(mut self, exclude_patterns: Vec<String>) -> Self {
        self.exclude_patterns = exclude_patterns;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and collect every note below the top level.
    ///
    /// Top-level files, hidden paths, root-document copies and excluded
    /// patterns are skipped. The result is sorted by relative path.
    pub fn walk(&self) -> Result<Vec<NoteFile>, TilError> {
        if !self.root.exists() {
            return Err(IndexingError::DirectoryNotFound(self.root.display().to_string()).into());
        }
        if !self.root.is_dir() {
            return Err(IndexingError::NotADirectory(self.root.display().to_string()).into());
        }

        let excludes = compile_patterns(&self.exclude_patterns);
        let mut notes = Vec::new();

        // Hidden entries are pruned at every depth, so nothing below them is
        // visited. Depth 0 is the root itself, whatever its name.
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
            });

        for entry in walker {
            let entry = entry.map_err(|e| IndexingError::WalkFailed(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "md") {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            let segments = path_segments(relative);
            if segments.len() < 2 || is_hidden(&segments) {
                continue;
            }

            let note = NoteFile {
                path: path.to_path_buf(),
                relative_path: segments.join("/"),
                segments,
            };

            if note.file_name() == self.readme_name {
                tracing::debug!("Skipping root document copy: {}", note.relative_path);
                continue;
            }

            if matches_any(&note.relative_path, &excludes) {
                tracing::debug!("Skipping excluded note: {}", note.relative_path);
                continue;
            }

            notes.push(note);
        }

        notes.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::info!("Found {} notes under {}", notes.len(), self.root.display());
        Ok(notes)
    }
}
