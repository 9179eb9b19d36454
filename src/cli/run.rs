//! Top-level command dispatch.

use colored::Colorize;
use tracing::debug;

use super::commands::Cli;
use super::profile;
use super::prompt::Prompt;
use super::setup::{SetupEnv, run_setup};
use crate::config::{AppPaths, ProfileManager, ProfileRequest, SwitcherConfig};
use crate::error::{Error, Result};
use crate::tool::Downloader;

/// Loads (or creates) the configuration record, then lists, sets the default, or
/// launches yt-dlp according to `cli`.
pub fn run(cli: Cli) -> Result<()> {
    let paths = match &cli.home {
        Some(root) => AppPaths::new(root.clone()),
        None => AppPaths::beside_executable()?,
    };
    debug!(root = %paths.root.display(), "using switcher root");
    let manager = ProfileManager::new(paths.profiles_dir.clone());

    let first_run = !paths.config_file.exists();
    let mut config = if first_run || cli.setup {
        if first_run {
            println!("No config found, creating one ...");
        }
        let config = setup(&paths, &manager)?;
        if cli.targets.is_empty() && !cli.list && cli.set_default.is_none() {
            println!(
                "{} Saved configuration to {}",
                "Setup complete.".green(),
                paths.config_file.display()
            );
            return Ok(());
        }
        config
    } else {
        SwitcherConfig::load(&paths.config_file)?
    };

    if cli.list {
        return profile::list_profiles(&manager, &mut std::io::stdout().lock());
    }

    if let Some(answer) = &cli.set_default {
        return profile::set_default(
            &manager,
            &mut config,
            &paths.config_file,
            answer,
            &mut std::io::stdout().lock(),
        );
    }

    let request = ProfileRequest::select(cli.profile.as_deref(), config.default_profile())?;
    let profile = manager.resolve(&request)?;
    let target = cli.target().ok_or(Error::MissingTarget)?;

    let downloader = Downloader::new(config.ytdlp_path.clone());
    downloader.ensure_installed()?;
    downloader.run(&profile, target, &mut std::io::stdout())
}

fn setup(paths: &AppPaths, manager: &ProfileManager) -> Result<SwitcherConfig> {
    std::fs::create_dir_all(&paths.root).map_err(|e| Error::file("create", &paths.root, e))?;

    let mut prompt = Prompt::stdio();
    let config = run_setup(&mut prompt, &SetupEnv::from_env(), manager)?;
    config.save(&paths.config_file)?;
    Ok(config)
}
