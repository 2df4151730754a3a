use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&BrowserConfig::default()).is_ok());
}

#[test]
fn jpeg_quality_zero_rejected() {
    let mut config = BrowserConfig::default();
    config.capture.jpeg_quality = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("capture.jpeg_quality"));
}

#[test]
fn jpeg_quality_bounds_accepted() {
    let mut config = BrowserConfig::default();
    config.capture.jpeg_quality = 1;
    assert!(validate(&config).is_ok());
    config.capture.jpeg_quality = 100;
    assert!(validate(&config).is_ok());
}

#[test]
fn file_name_with_separator_rejected() {
    let mut config = BrowserConfig::default();
    config.capture.file_name = "../escape.jpg".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bare file name"));
}

#[test]
fn empty_home_url_rejected() {
    let mut config = BrowserConfig::default();
    config.browser.home_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.home_url must not be empty"));
}

#[test]
fn toolbar_taller_than_window_rejected() {
    let mut config = BrowserConfig::default();
    config.window.height = 240;
    config.toolbar.height = 120;
    assert!(validate(&config).is_ok());

    config.window.height = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
    assert!(err.contains("toolbar.height"));
}

#[test]
fn all_errors_collected() {
    let mut config = BrowserConfig::default();
    config.window.width = 10;
    config.capture.jpeg_quality = 0;
    config.capture.file_name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches(';').count(), 2, "three violations joined: {err}");
}
