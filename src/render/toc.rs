use super::bookmark;
use crate::indexer::Grouping;

/// Indentation per nesting level
const INDENT: &str = "    ";

/// Render the nested table of contents: one list line per topic, linking to
/// the topic's bookmark.
pub fn render_toc(grouping: &Grouping) -> String {
    let lines: Vec<String> = grouping
        .topics()
        .map(|topic| {
            let indent = INDENT.repeat(topic.key.depth().saturating_sub(1));
            format!(
                "{}- [{}](#{})",
                indent,
                topic.key.name(),
                bookmark(&topic.key)
            )
        })
        .collect();

    lines.join("\n").trim().to_string()
}
