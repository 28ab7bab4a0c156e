use super::TilClient;
use crate::error::{ConfigError, TilError};
use crate::git::GitWalker;
use crate::glob_utils::{compile_patterns, matches_any};
use crate::notify::{NoteSummary, TeamsNotifier, files_markdown, prepare_payload, read_summary};
use crate::types::NotifyResponse;
use std::time::{Duration, Instant};

/// Summaries of the notes added between two commits, read from the working
/// tree of the repository.
pub fn added_note_summaries(
    client: &TilClient,
    from: &str,
    to: &str,
) -> Result<Vec<NoteSummary>, TilError> {
    let git = GitWalker::discover(&client.root)?;
    let excludes = compile_patterns(&client.config.index.exclude_patterns);

    let notify = &client.config.notify;
    git.added_files(from, to, &client.config.readme.file_name)?
        .into_iter()
        .filter(|path| !matches_any(path, &excludes))
        .map(|path| read_summary(git.repo_path(), &path, notify.excerpt_chars, notify.excerpt_width))
        .collect()
}

/// Post one card listing every note added between `from` and `to`.
///
/// Nothing is sent when no notes were added.
pub async fn do_notify(client: &TilClient, from: &str, to: &str) -> Result<NotifyResponse, TilError> {
    let start = Instant::now();
    let notify = &client.config.notify;

    let summaries = added_note_summaries(client, from, to)?;
    let added_notes: Vec<String> = summaries.iter().map(|s| s.path.clone()).collect();

    if summaries.is_empty() {
        tracing::info!("No notes added between {} and {}", from, to);
        return Ok(NotifyResponse {
            added_notes,
            notification_sent: false,
            duration_ms: start.elapsed().as_millis() as u64,
        });
    }

    if notify.webhook_url.is_empty() {
        return Err(ConfigError::MissingRequired("notify.webhook_url".to_string()).into());
    }
    if notify.repo_url.is_empty() {
        return Err(ConfigError::MissingRequired("notify.repo_url".to_string()).into());
    }

    let markdown = files_markdown(&notify.repo_url, &notify.blob_branch, &summaries);
    let payload = prepare_payload(&markdown);

    let notifier = TeamsNotifier::new(
        notify.webhook_url.clone(),
        Duration::from_secs(notify.timeout_secs),
    )?;
    notifier.send(&payload).await?;

    tracing::info!("Announced {} new notes", added_notes.len());
    Ok(NotifyResponse {
        added_notes,
        notification_sent: true,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
