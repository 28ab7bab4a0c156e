//! Git repository operations for note history
//!
//! Provides the first-seen commit date of every path (used to annotate the
//! index) and the notes added between two commits (used for notifications).

/// Git repository walking and diffing
pub mod walker;

pub use walker::GitWalker;

use crate::error::TilError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Relative `/`-separated path -> date of the commit that first touched it
pub type CreatedTimes = HashMap<String, NaiveDate>;

/// Source of note creation dates.
///
/// Implementations must return, for each path, the date of the earliest commit
/// reachable from `reference` that touched it.
pub trait ChangeHistory {
    fn created_times(&self, reference: &str) -> Result<CreatedTimes, TilError>;
}

/// A fixed mapping, independent of the requested reference
#[derive(Debug, Clone, Default)]
pub struct FixedHistory(pub CreatedTimes);

impl ChangeHistory for FixedHistory {
    fn created_times(&self, _reference: &str) -> Result<CreatedTimes, TilError> {
        Ok(self.0.clone())
    }
}

/// Another history seen from a subdirectory of the repository.
///
/// Only paths below `dir` are kept, re-keyed relative to it. An empty `dir`
/// is the working directory itself and passes every path through.
pub struct SubtreeHistory<'a> {
    inner: &'a dyn ChangeHistory,
    dir: String,
}

impl<'a> SubtreeHistory<'a> {
    pub fn new(inner: &'a dyn ChangeHistory, dir: impl Into<String>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }
}

impl ChangeHistory for SubtreeHistory<'_> {
    fn created_times(&self, reference: &str) -> Result<CreatedTimes, TilError> {
        let times = self.inner.created_times(reference)?;
        if self.dir.is_empty() {
            return Ok(times);
        }

        let prefix = format!("{}/", self.dir);
        Ok(times
            .into_iter()
            .filter_map(|(path, date)| {
                path.strip_prefix(&prefix)
                    .map(|relative| (relative.to_string(), date))
            })
            .collect())
    }
}
