//! Minibrowser configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so a partial file (or none at all) still yields a usable config.
//!
//! ```rust,no_run
//! use minibrowser_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("home page: {}", config.browser.home_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::BrowserConfig;

use std::path::Path;

use minibrowser_common::ConfigError;

/// Load config from the platform default path, creating it when missing.
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<BrowserConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}
