/// Grouping key for a release title.
///
/// Keeps the text before the first `(` or `[`, trimmed and lowercased, so
/// that "Album" and "Album (Deluxe)" share a key. A title that is empty
/// before its first annotation, such as "(Untitled)", keeps its whole
/// lowercased text instead of collapsing to an empty key.
pub fn essence(title: &str) -> String {
    let lead = title
        .find(['(', '['])
        .map_or(title, |idx| &title[..idx])
        .trim();

    if lead.is_empty() {
        title.trim().to_lowercase()
    } else {
        lead.to_lowercase()
    }
}
