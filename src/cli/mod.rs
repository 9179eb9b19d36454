//! Command-line interface for yt-dlp-switcher.

mod commands;
mod profile;
mod prompt;
mod run;
mod setup;

pub use commands::Cli;
pub use run::run;
