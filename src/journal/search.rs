use crate::models::ExtractedMessage;

/// Build the lowercase search blob for one conversation
///
/// The title (when non-empty) is followed by each message's role and text.
/// Whitespace runs, including newlines inside messages, collapse to a single
/// space. Clients do plain substring matching against this string.
pub fn build_search_blob(title: Option<&str>, messages: &[ExtractedMessage]) -> String {
    let pieces: Vec<&str> = title
        .filter(|t| !t.is_empty())
        .into_iter()
        .chain(messages.iter().flat_map(|m| [m.role.as_str(), m.text.as_str()]))
        .collect();

    normalize_whitespace(&pieces.join(" ")).to_lowercase()
}

/// Collapse whitespace runs to single spaces and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
