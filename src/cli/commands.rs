//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Run yt-dlp with one of several named config profiles.
#[derive(Parser, Debug)]
#[command(name = "yt-dlp-switcher")]
#[command(version, about = "Run yt-dlp with one of several named config profiles")]
pub struct Cli {
    /// Profile to use instead of the configured default.
    #[arg(short = 'c', long = "config", value_name = "NAME")]
    pub profile: Option<String>,

    /// List available profiles and exit.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Make NAME the default profile and exit.
    #[arg(long, value_name = "NAME")]
    pub set_default: Option<String>,

    /// Run first-time setup again, replacing the saved configuration.
    #[arg(long)]
    pub setup: bool,

    /// Directory holding config.toml and the profile directory [default: next to the executable].
    #[arg(long, env = "YTDLP_SWITCHER_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    /// Arguments for yt-dlp; only the last one is forwarded.
    #[arg(trailing_var_arg = true, value_name = "TARGET")]
    pub targets: Vec<String>,
}

impl Cli {
    /// The value forwarded to yt-dlp: the last positional argument.
    pub fn target(&self) -> Option<&str> {
        self.targets.last().map(String::as_str)
    }
}
