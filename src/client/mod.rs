//! Core library client for til-index
//!
//! Ties note discovery, rendering, document updates and notifications to one
//! notes repository and its configuration.

use crate::config::Config;
use crate::error::{IndexingError, TilError};
use crate::git::{ChangeHistory, FixedHistory, GitWalker, SubtreeHistory};
use crate::indexer::NoteWalker;
use crate::notify::NoteSummary;
use crate::types::{BuildResponse, NotifyResponse};
use std::path::{Path, PathBuf};

/// Main client for a notes repository
///
/// # Example
///
/// ```no_run
/// use til_index::TilClient;
///
/// fn main() -> anyhow::Result<()> {
///     let client = TilClient::new("/path/to/til")?;
///     let response = client.build_readme_from_git()?;
///     println!(
///         "Indexed {} notes into {} topics",
///         response.notes_indexed, response.topics
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TilClient {
    pub(crate) root: PathBuf,
    pub(crate) config: Config,
}

impl TilClient {
    /// Create a client using the repository's config file (if any) and
    /// environment overrides
    pub fn new(root: impl AsRef<Path>) -> Result<Self, TilError> {
        let root = root.as_ref();
        let config = Config::new(root, None)?;
        Self::with_config(root, config)
    }

    /// Create a client with a custom configuration
    pub fn with_config(root: impl AsRef<Path>, config: Config) -> Result<Self, TilError> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(IndexingError::DirectoryNotFound(root.display().to_string()).into());
        }
        if !root.is_dir() {
            return Err(IndexingError::NotADirectory(root.display().to_string()).into());
        }
        config.validate()?;

        tracing::debug!("Notes root: {}", root.display());
        tracing::debug!("Root document: {}", config.readme.file_name);

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the root document that receives the table of contents and index
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.config.readme.file_name)
    }

    /// Walker over this repository's notes, honouring the configured root
    /// document name and exclusions
    pub fn note_walker(&self) -> NoteWalker {
        NoteWalker::new(&self.root)
            .with_readme_name(self.config.readme.file_name.clone())
            .with_exclude_patterns(self.config.index.exclude_patterns.clone())
    }

    /// Rebuild the root document using creation dates from `history`
    pub fn build_readme(&self, history: &dyn ChangeHistory) -> Result<BuildResponse, TilError> {
        readme_build::do_build_readme(self, history)
    }

    /// Rebuild the root document using creation dates from the repository's
    /// own git history. The root may be any directory of the working tree.
    pub fn build_readme_from_git(&self) -> Result<BuildResponse, TilError> {
        let git = GitWalker::discover(&self.root)?;
        if !git.has_commits() {
            tracing::warn!("{} has no commits yet, notes will be undated", git.repo_path().display());
            return self.build_readme(&FixedHistory::default());
        }

        let dir = git.relative_dir(&self.root)?;
        if !dir.is_empty() {
            tracing::debug!("Notes root is {}/ in {}", dir, git.repo_path().display());
        }
        self.build_readme(&SubtreeHistory::new(&git, dir))
    }

    /// Title and excerpt of every note added between two commits
    pub fn added_notes(&self, from: &str, to: &str) -> Result<Vec<NoteSummary>, TilError> {
        notifying::added_note_summaries(self, from, to)
    }

    /// Announce the notes added between two commits
    pub async fn notify(&self, from: &str, to: &str) -> Result<NotifyResponse, TilError> {
        notifying::do_notify(self, from, to).await
    }
}

pub(crate) mod readme_build;

pub(crate) mod notifying;
