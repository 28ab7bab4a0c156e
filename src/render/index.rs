use super::bookmark;
use crate::indexer::{Grouping, Note};

/// Heading level of a top-level topic; deeper topics add one level each
const BASE_HEADING_LEVEL: usize = 2;

/// Render the index: a heading per topic carrying its bookmark anchor, followed
/// by a link to every note filed directly under it.
///
/// Topics without notes still get their heading so the index mirrors the
/// table of contents.
pub fn render_index(grouping: &Grouping) -> String {
    let mut parts: Vec<String> = Vec::new();

    for topic in grouping.topics() {
        let level = "#".repeat(topic.key.depth() + BASE_HEADING_LEVEL);
        parts.push(format!(
            "{} {} <a id=\"{}\"></a>\n",
            level,
            topic.key.name(),
            bookmark(&topic.key)
        ));

        parts.extend(topic.sorted_notes().into_iter().map(list_item));
        parts.push(String::new());
    }

    parts.join("\n").trim().to_string()
}

fn list_item(note: &Note) -> String {
    match note.created {
        Some(date) => format!(
            "- [{}]({}) - {}",
            note.title,
            note.relative_path,
            date.format("%Y-%m-%d")
        ),
        None => format!("- [{}]({})", note.title, note.relative_path),
    }
}
