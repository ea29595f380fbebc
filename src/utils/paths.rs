use std::path::{Component, Path};

/// Render a relative path with `/` separators regardless of platform
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use chat_journal::utils::to_posix;
///
/// let rel = PathBuf::from("notes").join("2024").join("plan.md");
/// assert_eq!(to_posix(&rel), "notes/2024/plan.md");
/// ```
pub fn to_posix(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// First normal component of a relative path
///
/// For a file directly under the root this is the file name itself.
pub fn first_segment(path: &Path) -> Option<String> {
    path.components().find_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    })
}

/// Turn an arbitrary identifier into a file stem that stays inside its directory
///
/// Path separators and NUL become `_`. Identifiers made only of dots (`.`,
/// `..`) and empty identifiers have no safe form and yield `None`.
pub fn safe_file_stem(id: &str) -> Option<String> {
    let stem: String =
        id.chars().map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c }).collect();

    if stem.chars().all(|c| c == '.') {
        return None;
    }

    Some(stem)
}
