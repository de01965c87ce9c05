
// Query strings and forms deliver absent fields as `None` and blank fields as `Some("")`.
pub fn is_str_present(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

// Usernames end up in a URL path segment.
pub fn to_path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

// Profile links are stored as typed. Bare hosts get `https://`; other schemes are dropped.
pub fn to_external_url(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let lower = value.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        return Some(value.to_string());
    }
    let has_scheme = match value.split_once(':') {
        Some((prefix, _)) => !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    };
    if has_scheme || value.starts_with("//") {
        return None;
    }
    Some(format!("https://{}", value))
}
