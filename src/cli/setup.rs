//! First-run setup: locate yt-dlp, import existing configs, pick a default.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use super::prompt::Prompt;
use crate::config::{ProfileManager, ProfileName, RenameMap, SwitcherConfig};
use crate::error::{Error, Result};
use crate::tool::{ProbeRoots, find_configs, find_tool, search_path};

/// Host environment consulted during setup.
#[derive(Debug, Clone, Default)]
pub struct SetupEnv {
    /// Directories searched for the yt-dlp executable.
    pub search_path: Vec<PathBuf>,
    /// Roots probed for existing yt-dlp configs.
    pub roots: ProbeRoots,
}

impl SetupEnv {
    pub fn from_env() -> Self {
        Self {
            search_path: search_path(),
            roots: ProbeRoots::from_env(),
        }
    }
}

/// Builds a new configuration record interactively.
///
/// Imported profiles are written into `manager`'s directory as a side effect; the
/// record itself is returned unsaved.
///
/// # Errors
/// Returns [`Error::SetupDeclined`] if yt-dlp is not on the search path and the
/// user declines to give its location. Import failures abort setup.
pub fn run_setup<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    env: &SetupEnv,
    manager: &ProfileManager,
) -> Result<SwitcherConfig> {
    let ytdlp_path = match find_tool(&env.search_path)? {
        Some(path) => {
            prompt.sayln(format_args!("Found yt-dlp at {}", path.display()))?;
            path
        }
        None => ask_tool_path(prompt)?,
    };
    let mut config = SwitcherConfig::new(ytdlp_path);

    prompt.say("Do you want to locate and import yt-dlp config files on this computer?(y/n): ")?;
    if !prompt.yes_no(None)? {
        prompt.sayln("Skipping config import")?;
        return Ok(config);
    }

    let found = find_configs(config.ytdlp_path.parent(), &env.roots);
    if found.is_empty() {
        prompt.sayln("Unable to find any yt-dlp configs")?;
        return Ok(config);
    }

    prompt.sayln("Found these configs:".bold())?;
    for path in &found {
        prompt.sayln(path.display())?;
    }

    prompt.say("Do you want to name the different configs?(y/n): ")?;
    let names = if prompt.yes_no(None)? {
        Some(ask_names(prompt, &found)?)
    } else {
        None
    };

    let written = manager.import(&found, names.as_ref())?;
    prompt.sayln(format_args!(
        "Imported {} config(s) into {}",
        written.len(),
        manager.profiles_dir().display()
    ))?;

    prompt.say("Do you want to set a default config?(y/n): ")?;
    if prompt.yes_no(None)? {
        let files = manager.profile_files()?;
        prompt.sayln("Which config do you want to set as default?".bold())?;
        for file in &files {
            prompt.sayln(file)?;
        }

        let choices = ProfileManager::default_choices(&files);
        let answer = prompt.text(Some(&choices))?;
        if let Some(file_name) = ProfileManager::normalize_default(&files, &answer) {
            config.set_default_profile(file_name);
        }
    }

    Ok(config)
}

fn ask_tool_path<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<PathBuf> {
    prompt.sayln(
        "Could not find the location of yt-dlp, please specify here (type 'n' if you don't have it):"
            .yellow(),
    )?;
    loop {
        let answer = prompt.line()?;
        if answer.eq_ignore_ascii_case("n") {
            return Err(Error::SetupDeclined);
        }

        let path = Path::new(&answer);
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => prompt.sayln(
                "The specified location is a folder, the given path must be the exact file location of yt-dlp",
            )?,
            Ok(_) => return Ok(std::path::absolute(path)?),
            Err(_) => prompt.sayln("The specified file does not exist, please try again:")?,
        }
    }
}

fn ask_names<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    found: &[PathBuf],
) -> Result<RenameMap> {
    prompt.sayln("Enter a name for each config (leave empty to keep the file name):")?;

    let mut names = RenameMap::new();
    for path in found {
        loop {
            prompt.say(format_args!("{}: ", path.display()))?;
            let answer = prompt.text(None)?;
            if answer.is_empty() {
                break;
            }
            match ProfileName::new(&answer) {
                Ok(name) => {
                    names.insert(path.clone(), name);
                    break;
                }
                Err(e) => prompt.sayln(e)?,
            }
        }
    }
    Ok(names)
}
