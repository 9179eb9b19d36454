//! Profile listing and default selection commands.

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::config::{ProfileManager, SwitcherConfig, strip_extension};
use crate::error::Result;

/// Prints one profile name per line, extension stripped, in directory order.
pub fn list_profiles<W: Write>(manager: &ProfileManager, out: &mut W) -> Result<()> {
    for name in manager.list_profiles()? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Stores `answer` as the default profile after checking it exists.
pub fn set_default<W: Write>(
    manager: &ProfileManager,
    config: &mut SwitcherConfig,
    config_file: &Path,
    answer: &str,
    out: &mut W,
) -> Result<()> {
    let file_name = manager.choose_default(answer)?;
    config.set_default_profile(file_name.clone());
    config.save(config_file)?;
    writeln!(
        out,
        "Default profile set to {}",
        strip_extension(&file_name).green()
    )?;
    Ok(())
}
