//! Window title: page title first, app name last.

/// Format: "{page} - {app}", or just the app name for untitled pages.
pub fn window_title(page_title: &str, app_title: &str) -> String {
    let page = page_title.trim();
    if page.is_empty() {
        app_title.to_string()
    } else {
        format!("{page} - {app_title}")
    }
}
