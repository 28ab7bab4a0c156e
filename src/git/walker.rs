use super::{ChangeHistory, CreatedTimes};
use crate::error::{GitError, TilError};
use chrono::{DateTime, NaiveDate};
use git2::{Delta, DiffFindOptions, Repository, Sort};
use std::path::{Path, PathBuf};

/// Git repository walker for note history
pub struct GitWalker {
    repo: Repository,
    repo_path: PathBuf,
}

impl GitWalker {
    /// Discover and open a git repository from any path within it
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self, TilError> {
        let path = path.as_ref();

        let repo = Repository::discover(path)
            .map_err(|e| GitError::OpenFailed(format!("{}: {}", path.display(), e.message())))?;

        let repo_path = repo
            .workdir()
            .ok_or_else(|| GitError::OpenFailed(format!("{} is a bare repository", path.display())))?
            .to_path_buf();

        tracing::info!("Opened git repository at: {}", repo_path.display());

        Ok(Self { repo, repo_path })
    }

    /// Get the repository root path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// `/`-separated location of `path` inside the working directory, empty
    /// for the working directory itself
    pub fn relative_dir(&self, path: &Path) -> Result<String, TilError> {
        let workdir = self.repo_path.canonicalize()?;
        let path = path.canonicalize()?;
        let relative = path.strip_prefix(&workdir).map_err(|_| {
            GitError::OpenFailed(format!(
                "{} is outside the working directory {}",
                path.display(),
                workdir.display()
            ))
        })?;
        Ok(slash_path(relative))
    }

    /// Check if repository has any commits
    pub fn has_commits(&self) -> bool {
        self.repo.head().is_ok()
    }

    fn resolve_commit(&self, reference: &str) -> Result<git2::Commit<'_>, TilError> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| GitError::RefNotFound(format!("{}: {}", reference, e.message())))?;
        Ok(commit)
    }

    /// Paths touched by a commit relative to its first parent (or the empty
    /// tree for a root commit)
    fn changed_paths(&self, commit: &git2::Commit) -> Result<Vec<String>, TilError> {
        let diff_failed = |e: git2::Error| GitError::DiffFailed(e.message().to_string());

        let tree = commit.tree().map_err(diff_failed)?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(
                commit
                    .parent(0)
                    .and_then(|parent| parent.tree())
                    .map_err(diff_failed)?,
            )
        } else {
            None
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
            .map_err(diff_failed)?;

        Ok(diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(slash_path)
            .collect())
    }

    /// First-seen commit date of every path reachable from `reference`.
    ///
    /// History is walked oldest first, so the first date recorded for a path
    /// is the date of the commit that introduced it.
    pub fn created_times(&self, reference: &str) -> Result<CreatedTimes, TilError> {
        let start = self.resolve_commit(reference)?;

        let iter_failed = |e: git2::Error| GitError::IterFailed(e.message().to_string());
        let mut revwalk = self.repo.revwalk().map_err(iter_failed)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)
            .map_err(iter_failed)?;
        revwalk.push(start.id()).map_err(iter_failed)?;

        let mut created = CreatedTimes::new();
        let mut count = 0usize;

        for oid in revwalk {
            let oid = oid.map_err(iter_failed)?;
            let commit = self.repo.find_commit(oid).map_err(iter_failed)?;
            let date = commit_date(&commit);

            for path in self.changed_paths(&commit)? {
                created.entry(path).or_insert(date);
            }

            count += 1;
            if count % 100 == 0 {
                tracing::debug!("Processed {} commits", count);
            }
        }

        tracing::info!(
            "Read creation dates for {} paths from {} commits on {}",
            created.len(),
            count,
            reference
        );
        Ok(created)
    }

    /// Markdown files added between two commits, excluding any file named
    /// `readme_name`. Renamed files are not reported as added.
    pub fn added_files(
        &self,
        from: &str,
        to: &str,
        readme_name: &str,
    ) -> Result<Vec<String>, TilError> {
        let diff_failed = |e: git2::Error| GitError::DiffFailed(e.message().to_string());

        let from_tree = self.resolve_commit(from)?.tree().map_err(diff_failed)?;
        let to_tree = self.resolve_commit(to)?.tree().map_err(diff_failed)?;

        let mut diff = self
            .repo
            .diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)
            .map_err(diff_failed)?;
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))
            .map_err(diff_failed)?;

        let added: Vec<String> = diff
            .deltas()
            .filter(|delta| delta.status() == Delta::Added)
            .filter_map(|delta| delta.new_file().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .filter(|path| path.file_name().is_none_or(|name| name != readme_name))
            .map(slash_path)
            .collect();

        tracing::info!("Found {} added notes between {} and {}", added.len(), from, to);
        Ok(added)
    }
}

impl ChangeHistory for GitWalker {
    fn created_times(&self, reference: &str) -> Result<CreatedTimes, TilError> {
        GitWalker::created_times(self, reference)
    }
}

/// Calendar date of a commit in the committer's own timezone
fn commit_date(commit: &git2::Commit) -> NaiveDate {
    let time = commit.time();
    let local_seconds = time.seconds() + i64::from(time.offset_minutes()) * 60;
    DateTime::from_timestamp(local_seconds, 0)
        .map(|local| local.date_naive())
        .unwrap_or(NaiveDate::MIN)
}

fn slash_path(path: &Path) -> String {
    crate::paths::path_segments(path).join("/")
}
