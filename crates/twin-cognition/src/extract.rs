//! JSON region extraction from raw model output.

/// Return the candidate JSON region of `text`: from the first `{` to
/// the last `}`, inclusive.
///
/// This is deliberately greedy and NOT balanced-brace aware, matching
/// the established extraction contract. On text with several
/// JSON-like regions, or stray trailing braces, the candidate can
/// fail to parse and the caller falls back — a known limitation of
/// the heuristic, not a bug to fix with a balanced parser (which
/// would silently change behavior on exactly those inputs).
pub fn extract_json_region(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
