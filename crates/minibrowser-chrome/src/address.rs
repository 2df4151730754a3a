//! Address bar input normalization.

/// Turn address bar text into a loadable URL.
///
/// Text that already starts with `http:` or `https:` passes through
/// untouched; anything else gets `https://` prepended. No other validation
/// happens here: a malformed URL is the hosted view's problem to report.
pub fn normalize_address(raw: &str) -> String {
    if raw.starts_with("http:") || raw.starts_with("https:") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}
