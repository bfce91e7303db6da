/// Roster exports are messy: placeholder strings stand in for blanks and
/// list cells mix separators and casing. These helpers collapse all of
/// that to "absent" before the presence predicate ever sees it.
pub(crate) fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "n/a" | "na" | "none" | "-" | "--" => None,
        _ => Some(trimmed.to_string()),
    }
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter_map(normalize_text)
        .collect()
}
