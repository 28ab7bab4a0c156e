//! Idempotent splicing of rendered fragments into the target document
//!
//! Each fragment lives between a pair of marker comments. Everything outside
//! the markers is preserved byte-for-byte.

use crate::error::TilError;
use regex::{NoExpand, Regex};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A replaceable region of the document, delimited by marker comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: &'static str,
    pub end: &'static str,
}

/// Table of contents region
pub const TOC: Region = Region {
    start: "<!-- toc starts -->",
    end: "<!-- toc ends -->",
};

/// Index of notes region
pub const INDEX: Region = Region {
    start: "<!-- index starts -->",
    end: "<!-- index ends -->",
};

impl Region {
    /// Fragment surrounded by this region's markers
    pub fn wrap(&self, fragment: &str) -> String {
        format!("{}\n{}\n{}", self.start, fragment, self.end)
    }

    /// Matches from the first start marker through the last end marker
    fn pattern(&self) -> Result<Regex, TilError> {
        let pattern = format!(
            "(?s){}.*{}",
            regex::escape(self.start),
            regex::escape(self.end)
        );
        Regex::new(&pattern).map_err(|e| TilError::other(format!("Invalid marker pattern: {}", e)))
    }

    /// Replace this region's content, or append the region when its markers
    /// are missing.
    pub fn splice(&self, document: &str, fragment: &str) -> Result<String, TilError> {
        let wrapped = self.wrap(fragment);
        let pattern = self.pattern()?;

        if pattern.is_match(document) {
            return Ok(pattern
                .replacen(document, 1, NoExpand(&wrapped))
                .into_owned());
        }

        let mut updated = String::with_capacity(document.len() + wrapped.len() + 2);
        updated.push_str(document);
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&wrapped);
        updated.push('\n');
        Ok(updated)
    }
}

/// Splice both fragments into document text
pub fn splice_document(document: &str, toc: &str, index: &str) -> Result<String, TilError> {
    let document = TOC.splice(document, toc)?;
    INDEX.splice(&document, index)
}

/// Read a document, treating a missing file as empty
pub fn read_document(path: &Path) -> Result<String, TilError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("{} does not exist yet, starting from an empty document", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Replace a file's content through a sibling temporary file and a rename
pub fn write_document(path: &Path, content: &str) -> Result<(), TilError> {
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.til-index.tmp", name))
}

/// Update the document at `path` with both fragments.
///
/// Returns whether the content changed.
pub fn update_readme(path: &Path, toc: &str, index: &str) -> Result<bool, TilError> {
    let current = read_document(path)?;
    let updated = splice_document(&current, toc, index)?;
    let changed = updated != current;

    write_document(path, &updated)?;

    if changed {
        tracing::info!("Updated {}", path.display());
    } else {
        tracing::info!("{} is already up to date", path.display());
    }
    Ok(changed)
}
