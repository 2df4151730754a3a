/// Default TOML config content. Everything is commented out so the file
/// documents the defaults without pinning them.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Mini Browser configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Mini Browser"
# width = 1200           # 320-7680
# height = 800           # 240-4320

[browser]
# home_url = "about:blank"
# user_agent = "MiniBrowser/0.1"
# devtools = false

[toolbar]
# height = 44            # 24-120

[capture]
# jpeg_quality = 80      # 1-100
# file_name = "mini-browser.jpg"
# directory = "/path/to/screenshots"   # defaults to the downloads folder

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
