//! Config validation.
//!
//! Every check appends to a shared error list; the caller gets a single
//! `ConfigError` naming all violations at once.

mod helpers;

#[cfg(test)]
mod tests;

use minibrowser_common::ConfigError;

use crate::schema::BrowserConfig;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BrowserConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_browser(&mut errors, config);
    validate_capture(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &BrowserConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
    validate_range(errors, "toolbar.height", config.toolbar.height, 24, 120);
    if config.toolbar.height >= config.window.height {
        errors.push(format!(
            "toolbar.height = {} must be smaller than window.height = {}",
            config.toolbar.height, config.window.height
        ));
    }
}

fn validate_browser(errors: &mut Vec<String>, config: &BrowserConfig) {
    validate_non_empty(errors, "browser.home_url", &config.browser.home_url);
}

fn validate_capture(errors: &mut Vec<String>, config: &BrowserConfig) {
    validate_range(
        errors,
        "capture.jpeg_quality",
        u32::from(config.capture.jpeg_quality),
        1,
        100,
    );
    validate_non_empty(errors, "capture.file_name", &config.capture.file_name);
    if config.capture.file_name.contains(['/', '\\']) {
        errors.push(format!(
            "capture.file_name = {:?} must be a bare file name",
            config.capture.file_name
        ));
    }
}
