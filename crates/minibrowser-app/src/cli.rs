use clap::Parser;
use minibrowser_config::schema::LogLevel;

/// Log directive used when neither the CLI nor the config picks one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "minibrowser=info";

/// Mini Browser: a single web view with a navigation toolbar.
#[derive(Parser, Debug)]
#[command(name = "minibrowser", version, about)]
pub struct Args {
    /// Page to open instead of the configured home page.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive (e.g. debug, minibrowser_chrome=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// The CLI override wins, then the config file's level.
pub fn log_directive(cli: Option<&str>, config: Option<LogLevel>) -> String {
    match (cli, config) {
        (Some(directive), _) => directive.to_string(),
        (None, Some(level)) => format!("minibrowser={}", level.as_directive()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}
