//! # til-index - Table of Contents and Index for a TIL Notes Repository
//!
//! Keeps the root document of a "Today I Learned" repository in sync with the
//! notes stored in its topic folders, and announces newly added notes to an
//! MS Teams channel.
//!
//! ## Overview
//!
//! Every markdown file below the top level of the repository is a note. Its
//! folder path is its topic (`go/concurrency/select.md` is filed under
//! *Go / Concurrency*). Folder names with a leading underscore are *sticky* and
//! always sort before their siblings.
//!
//! The root document gets two regions, each delimited by marker comments:
//!
//! - a nested table of contents linking to every topic
//! - an index with a heading per topic listing its notes, annotated with the
//!   date of the commit that first added them
//!
//! Anything outside the markers is left untouched, and rebuilding twice yields
//! a byte-identical document.
//!
//! ## Architecture
//!
//! ```text
//! notes on disk ──► NoteWalker ──► index_topics ──► Grouping
//!                                       ▲               │
//! git history ───► ChangeHistory ───────┘       render_toc / render_index
//!                                                       │
//!                                                       ▼
//!                                   root document ◄── update_readme
//! ```
//!
//! ## Modules
//!
//! - [`indexer`]: Note discovery, titles and topic grouping
//! - [`render`]: Table of contents and index fragments
//! - [`readme`]: Marker-delimited splicing into the root document
//! - [`git`]: Creation dates and added notes from git history
//! - [`notify`]: Teams Adaptive Card notifications for new notes
//! - [`client`]: High-level API tying the pieces together
//! - [`config`]: Configuration with file and environment overrides
//! - [`types`]: Operation responses
//! - [`error`]: Error types
//!
//! ## Usage Example
//!
//! ```no_run
//! use til_index::TilClient;
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = TilClient::new(".")?;
//!     let response = client.build_readme_from_git()?;
//!     println!("Indexed {} notes", response.notes_indexed);
//!     Ok(())
//! }
//! ```

/// High-level client for building the root document and sending notifications
pub mod client;

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Git history: note creation dates and added notes
pub mod git;

/// Glob matching for note exclusion
pub mod glob_utils;

/// Note walking, title extraction and topic grouping
pub mod indexer;

/// MS Teams notifications for newly added notes
pub mod notify;

/// Path normalization utilities
pub mod paths;

/// Marker-delimited regions of the root document
pub mod readme;

/// Table of contents and index rendering
pub mod render;

/// Operation response types
pub mod types;

pub use client::TilClient;
pub use config::Config;
pub use error::TilError;
pub use git::{ChangeHistory, FixedHistory, GitWalker, SubtreeHistory};
pub use types::{BuildResponse, NotifyResponse};
