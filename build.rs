//! Stamps `til-index --version` with the commit the binary was built from.

use git2::{Repository, StatusOptions};
use std::path::Path;

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo = Repository::discover(&manifest_dir).ok();

    let commit = repo
        .as_ref()
        .and_then(source_commit)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=TIL_INDEX_COMMIT={}", commit);

    println!(
        "cargo:rustc-env=TIL_INDEX_BUILD_DATE={}",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    if let Some(git_dir) = repo.as_ref().map(Repository::path) {
        rerun_if_changed(&git_dir.join("HEAD"));
        rerun_if_changed(&git_dir.join("index"));
        rerun_if_changed(&git_dir.join("refs/heads"));
    }
}

/// Short id of HEAD, suffixed with `-dirty` when tracked files differ from it
fn source_commit(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?.peel_to_commit().ok()?;
    let short_id = head.as_object().short_id().ok()?;
    let mut commit = short_id.as_str()?.to_string();

    let mut options = StatusOptions::new();
    options.include_untracked(false).include_ignored(false);
    let dirty = repo
        .statuses(Some(&mut options))
        .is_ok_and(|statuses| !statuses.is_empty());
    if dirty {
        commit.push_str("-dirty");
    }
    Some(commit)
}

fn rerun_if_changed(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}
