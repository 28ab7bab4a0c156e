//! Markdown rendering of a [`Grouping`](crate::indexer::Grouping)
//!
//! Both fragments are derived from the same grouping and share bookmark ids,
//! so every table-of-contents link lands on its index heading.

mod index;
mod toc;

pub use index::render_index;
pub use toc::render_toc;

use crate::indexer::TopicKey;

/// Separator between topic levels in a bookmark id
const BOOKMARK_SEPARATOR: &str = "--";

/// HTML anchor id for a topic, unique per full topic path.
///
/// # Examples
///
/// ```
/// use til_index::indexer::TopicKey;
/// use til_index::render::bookmark;
///
/// let key = TopicKey::from_slugs(["python", "unit-testing"]);
/// assert_eq!(bookmark(&key), "python--unit-testing");
/// ```
pub fn bookmark(key: &TopicKey) -> String {
    key.segments()
        .iter()
        .map(|segment| {
            segment
                .name
                .to_lowercase()
                .replace(' ', "-")
                .replace(['\'', '"'], "")
        })
        .collect::<Vec<_>>()
        .join(BOOKMARK_SEPARATOR)
}
