/// Path normalization for note files
///
/// Notes are identified by their path relative to the repository root, always
/// written with forward slashes so they line up with the paths git reports.
use std::path::{Component, Path};

/// Split a relative path into its normal components as strings
pub fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}

/// Whether any segment of a relative path is hidden (starts with a dot)
pub fn is_hidden(segments: &[String]) -> bool {
    segments.iter().any(|segment| segment.starts_with('.'))
}

/// File name without its extension, as used for fallback titles
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(idx) => &name[..idx],
    }
}
