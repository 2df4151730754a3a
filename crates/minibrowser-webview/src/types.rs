/// Configuration for creating a webview.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string. `None` keeps the engine default.
    pub user_agent: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

impl ViewConfig {
    /// A config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// A config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// URL the view reports before its first load finishes.
    pub fn initial_url(&self) -> &str {
        self.url.as_deref().unwrap_or("about:blank")
    }

    pub(crate) fn apply<'a>(&self, mut builder: wry::WebViewBuilder<'a>) -> wry::WebViewBuilder<'a> {
        builder = builder.with_devtools(self.devtools);
        if let Some(ua) = &self.user_agent {
            builder = builder.with_user_agent(ua);
        }
        if let Some(url) = &self.url {
            builder.with_url(url)
        } else if let Some(html) = &self.html {
            builder.with_html(html)
        } else {
            builder.with_url("about:blank")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_url_defaults_to_blank() {
        assert_eq!(ViewConfig::default().initial_url(), "about:blank");
        assert_eq!(ViewConfig::with_html("<p>hi</p>").initial_url(), "about:blank");
        assert_eq!(
            ViewConfig::with_url("https://example.com/").initial_url(),
            "https://example.com/"
        );
    }

    #[test]
    fn constructors_are_exclusive() {
        let cfg = ViewConfig::with_url("https://a.test/");
        assert!(cfg.html.is_none());
        let cfg = ViewConfig::with_html("<p></p>");
        assert!(cfg.url.is_none());
    }
}
