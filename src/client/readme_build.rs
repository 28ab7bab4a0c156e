use super::TilClient;
use crate::error::TilError;
use crate::git::ChangeHistory;
use crate::indexer::index_topics;
use crate::readme::update_readme;
use crate::render::{render_index, render_toc};
use crate::types::BuildResponse;
use std::time::Instant;

/// Index every note, render both fragments and splice them into the root
/// document.
///
/// Both fragments are rendered before the document is touched, so a failure
/// anywhere leaves the document as it was.
pub fn do_build_readme(
    client: &TilClient,
    history: &dyn ChangeHistory,
) -> Result<BuildResponse, TilError> {
    let start = Instant::now();

    let created_times = history.created_times(&client.config.readme.branch)?;
    let grouping = index_topics(&client.note_walker(), &created_times)?;

    let toc = render_toc(&grouping);
    let index = render_index(&grouping);

    let readme_path = client.readme_path();
    let document_changed = update_readme(&readme_path, &toc, &index)?;

    let duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "Built {} in {}ms ({} notes, {} topics)",
        readme_path.display(),
        duration_ms,
        grouping.note_count(),
        grouping.len()
    );

    Ok(BuildResponse {
        readme_path: readme_path.display().to_string(),
        notes_indexed: grouping.note_count(),
        topics: grouping.len(),
        document_changed,
        duration_ms,
    })
}
