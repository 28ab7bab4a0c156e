//! Topic keys derived from note folder paths

use std::cmp::Ordering;
use std::fmt;

/// Convert a slug to a human-readable label.
///
/// Hyphens and underscores become spaces, surrounding whitespace is trimmed and
/// only the first character is uppercased; the rest is left as-is.
///
/// # Examples
///
/// ```
/// use til_index::indexer::deslugify;
///
/// assert_eq!(deslugify("linked-lists"), "Linked lists");
/// assert_eq!(deslugify("_meta"), "Meta");
/// assert_eq!(deslugify("macOS"), "MacOS");
/// assert_eq!(deslugify("git_LFS"), "Git LFS");
/// ```
pub fn deslugify(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");
    let trimmed = spaced.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One level of a topic path.
///
/// `sticky` records that the folder name carried a leading underscore; the
/// underscore itself never reaches `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicSegment {
    pub name: String,
    pub sticky: bool,
}

impl TopicSegment {
    /// Build a segment from a raw folder name
    pub fn from_slug(slug: &str) -> Self {
        Self {
            name: deslugify(slug),
            sticky: slug.starts_with('_'),
        }
    }
}

impl Ord for TopicSegment {
    // Sticky segments first, then by display name
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .sticky
            .cmp(&self.sticky)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for TopicSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hierarchical topic identifier.
///
/// Ordering is lexicographic over segments, so a parent always sorts directly
/// before its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TopicKey(Vec<TopicSegment>);

impl TopicKey {
    pub fn new(segments: Vec<TopicSegment>) -> Self {
        Self(segments)
    }

    /// Build a key from raw folder names
    pub fn from_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            slugs
                .into_iter()
                .map(|slug| TopicSegment::from_slug(slug.as_ref()))
                .collect(),
        )
    }

    pub fn segments(&self) -> &[TopicSegment] {
        &self.0
    }

    /// Nesting depth; top-level topics have depth 1
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display name of the innermost segment
    pub fn name(&self) -> &str {
        self.0.last().map(|s| s.name.as_str()).unwrap_or_default()
    }

    /// Every strict, non-empty prefix of this key, shortest first
    pub fn strict_prefixes(&self) -> impl Iterator<Item = TopicKey> + '_ {
        (1..self.0.len()).map(|len| TopicKey(self.0[..len].to_vec()))
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|s| s.name.as_str()).collect();
        write!(f, "{}", names.join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deslugify_replaces_separators() {
        assert_eq!(deslugify("unit-testing_basics"), "Unit testing basics");
    }

    #[test]
    fn test_deslugify_trims_and_keeps_rest() {
        assert_eq!(deslugify("-pytest-"), "Pytest");
        assert_eq!(deslugify("iOS"), "IOS");
        assert_eq!(deslugify("already Capital"), "Already Capital");
    }

    #[test]
    fn test_deslugify_empty() {
        assert_eq!(deslugify(""), "");
        assert_eq!(deslugify("_"), "");
    }

    #[test]
    fn test_deslugify_multichar_uppercase() {
        assert_eq!(deslugify("ßtraße"), "SStraße");
    }

    #[test]
    fn test_segment_from_slug() {
        let meta = TopicSegment::from_slug("_meta");
        assert_eq!(meta.name, "Meta");
        assert!(meta.sticky);

        let go = TopicSegment::from_slug("go");
        assert_eq!(go.name, "Go");
        assert!(!go.sticky);
    }

    #[test]
    fn test_sticky_sorts_first() {
        let mut keys = vec![
            TopicKey::from_slugs(["python"]),
            TopicKey::from_slugs(["_Meta"]),
            TopicKey::from_slugs(["Go"]),
        ];
        keys.sort();

        let names: Vec<&str> = keys.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["Meta", "Go", "Python"]);
    }

    #[test]
    fn test_sticky_applies_per_depth() {
        let mut keys = vec![
            TopicKey::from_slugs(["go", "testing"]),
            TopicKey::from_slugs(["go", "_basics"]),
            TopicKey::from_slugs(["go"]),
            TopicKey::from_slugs(["_about"]),
        ];
        keys.sort();

        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["About", "Go", "Go / Basics", "Go / Testing"]
        );
    }

    #[test]
    fn test_strict_prefixes() {
        let key = TopicKey::from_slugs(["go", "concurrency", "channels"]);
        let prefixes: Vec<TopicKey> = key.strict_prefixes().collect();
        assert_eq!(
            prefixes,
            vec![
                TopicKey::from_slugs(["go"]),
                TopicKey::from_slugs(["go", "concurrency"]),
            ]
        );
    }

    #[test]
    fn test_depth_and_name() {
        let key = TopicKey::from_slugs(["python", "unit-testing"]);
        assert_eq!(key.depth(), 2);
        assert_eq!(key.name(), "Unit testing");
        assert_eq!(TopicKey::default().name(), "");
    }
}
