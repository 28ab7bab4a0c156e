//! Glob pattern matching utilities for excluding notes from the index

use globset::{Glob, GlobMatcher};

/// Compile glob patterns into matchers for repeated matching.
///
/// Patterns that fail to compile are logged and skipped.
pub fn compile_patterns(patterns: &[String]) -> Vec<GlobMatcher> {
    patterns
        .iter()
        .filter_map(|pattern| match Glob::new(pattern) {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                tracing::warn!("Ignoring invalid glob pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Check if a relative `/`-separated path matches any of the matchers.
///
/// Besides the full path, every suffix starting at a segment boundary is tried,
/// so `drafts/**` also matches `go/drafts/select.md`. An empty matcher list
/// matches nothing.
///
/// # Examples
///
/// ```
/// use til_index::glob_utils::{compile_patterns, matches_any};
///
/// let matchers = compile_patterns(&["drafts/**".to_string(), "**/wip-*.md".to_string()]);
/// assert!(matches_any("drafts/idea.md", &matchers));
/// assert!(matches_any("go/drafts/select.md", &matchers));
/// assert!(matches_any("rust/wip-lifetimes.md", &matchers));
/// assert!(!matches_any("go/channels.md", &matchers));
/// ```
pub fn matches_any(path: &str, matchers: &[GlobMatcher]) -> bool {
    if matchers.is_empty() {
        return false;
    }

    let path = path.trim_start_matches('/');
    let parts: Vec<&str> = path.split('/').collect();

    matchers.iter().any(|matcher| {
        (0..parts.len()).any(|i| {
            let suffix = parts[i..].join("/");
            matcher.is_match(&suffix)
        })
    })
}
