mod cli;
mod config;
mod error;
mod tool;

use clap::Parser;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logs go to stderr; stdout carries prompts, profile lists and yt-dlp output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    cli::run(cli)?;

    Ok(())
}
