/// Integration tests against throwaway git repositories
use anyhow::Result;
use chrono::NaiveDate;
use git2::{Oid, Repository, Signature, Time};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use til_index::git::ChangeHistory;
use til_index::{Config, GitWalker, TilClient};

// 2023-01-05 12:00:00 UTC
const DAY_ONE: i64 = 1_672_920_000;
const ONE_DAY: i64 = 86_400;

fn write(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn commit_all(repo: &Repository, message: &str, seconds: i64) -> Result<Oid> {
    let mut index = repo.index()?;
    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
    index.update_all(["*"], None)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let sig = Signature::new("Tester", "tester@example.com", &Time::new(seconds, 0))?;
    let parents: Vec<git2::Commit> = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    Ok(repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)?)
}

fn head_config() -> Config {
    let mut config = Config::default();
    config.readme.branch = "HEAD".to_string();
    config
}

#[test]
fn test_dates_follow_first_commit() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    write(temp_dir.path(), "go/channels.md", "# Channels\n")?;
    commit_all(&repo, "Add channels", DAY_ONE)?;

    write(temp_dir.path(), "go/select.md", "# Select\n")?;
    write(temp_dir.path(), "go/channels.md", "# Channels\nEdited later.\n")?;
    commit_all(&repo, "Add select", DAY_ONE + 2 * ONE_DAY)?;

    let client = TilClient::with_config(temp_dir.path(), head_config())?;
    client.build_readme_from_git()?;
    let readme = fs::read_to_string(client.readme_path())?;

    assert!(readme.contains("- [Channels](go/channels.md) - 2023-01-05"));
    assert!(readme.contains("- [Select](go/select.md) - 2023-01-07"));
    Ok(())
}

#[test]
fn test_uncommitted_note_has_no_date() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    write(temp_dir.path(), "go/channels.md", "# Channels\n")?;
    commit_all(&repo, "Add channels", DAY_ONE)?;
    write(temp_dir.path(), "go/draft.md", "# Draft\n")?;

    let client = TilClient::with_config(temp_dir.path(), head_config())?;
    client.build_readme_from_git()?;
    let readme = fs::read_to_string(client.readme_path())?;

    assert!(readme.contains("- [Draft](go/draft.md)\n"));
    Ok(())
}

#[test]
fn test_notes_root_below_git_root_keeps_dates() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    write(temp_dir.path(), "notes/go/channels.md", "# Channels\n")?;
    write(temp_dir.path(), "site/go/layout.md", "# Layout\n")?;
    commit_all(&repo, "Add channels", DAY_ONE)?;

    let client = TilClient::with_config(temp_dir.path().join("notes"), head_config())?;
    let response = client.build_readme_from_git()?;
    let readme = fs::read_to_string(client.readme_path())?;

    assert_eq!(response.notes_indexed, 1);
    assert!(readme.contains("- [Channels](go/channels.md) - 2023-01-05\n"));
    assert!(!readme.contains("Layout"));
    Ok(())
}

#[test]
fn test_rebuild_after_committing_readme_is_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    write(temp_dir.path(), "python/fixtures.md", "# Fixtures\n")?;
    commit_all(&repo, "Add fixtures", DAY_ONE)?;

    let client = TilClient::with_config(temp_dir.path(), head_config())?;
    assert!(client.build_readme_from_git()?.document_changed);
    commit_all(&repo, "Build readme", DAY_ONE + ONE_DAY)?;

    assert!(!client.build_readme_from_git()?.document_changed);
    Ok(())
}

#[test]
fn test_walker_as_change_history() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    write(temp_dir.path(), "go/channels.md", "# Channels\n")?;
    let first = commit_all(&repo, "Add channels", DAY_ONE)?;
    write(temp_dir.path(), "go/select.md", "# Select\n")?;
    commit_all(&repo, "Add select", DAY_ONE + ONE_DAY)?;

    let walker = GitWalker::discover(temp_dir.path())?;
    let history: &dyn ChangeHistory = &walker;

    let at_first = history.created_times(&first.to_string())?;
    assert_eq!(
        at_first.get("go/channels.md"),
        NaiveDate::from_ymd_opt(2023, 1, 5).as_ref()
    );
    assert!(!at_first.contains_key("go/select.md"));
    Ok(())
}

#[test]
fn test_added_notes_skip_renames_and_readme() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let repo = Repository::init(temp_dir.path())?;

    let body = "# Channels\n\nChannels connect goroutines and let them exchange values safely.\n";
    write(temp_dir.path(), "go/channels.md", body)?;
    let first = commit_all(&repo, "Add channels", DAY_ONE)?;

    fs::create_dir_all(temp_dir.path().join("golang"))?;
    fs::rename(
        temp_dir.path().join("go/channels.md"),
        temp_dir.path().join("golang/channels.md"),
    )?;
    write(temp_dir.path(), "golang/README.md", "# Golang\n")?;
    write(temp_dir.path(), "rust/lifetimes.md", "# Lifetimes\nBorrowed data must outlive its uses.\n")?;
    write(temp_dir.path(), "rust/notes.txt", "not markdown")?;
    let second = commit_all(&repo, "Move and add", DAY_ONE + ONE_DAY)?;

    let client = TilClient::with_config(temp_dir.path(), head_config())?;
    let added = client.added_notes(&first.to_string(), &second.to_string())?;

    let paths: Vec<&str> = added.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(paths, vec!["rust/lifetimes.md"]);
    assert_eq!(added[0].title, "Lifetimes");
    assert_eq!(added[0].excerpt, "Borrowed data must outlive its uses.");
    Ok(())
}
