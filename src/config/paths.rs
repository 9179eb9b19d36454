//! Locations of the switcher's own files.

use std::path::PathBuf;

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "config.toml";
const PROFILES_DIR_NAME: &str = "yt-dlp configs";

/// Paths derived from the switcher's root directory.
///
/// ```text
/// <root>/
/// ├── config.toml
/// └── yt-dlp configs/
///     ├── music.conf
///     └── video.conf
/// ```
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn new(root: PathBuf) -> Self {
        let config_file = root.join(CONFIG_FILE_NAME);
        let profiles_dir = root.join(PROFILES_DIR_NAME);
        Self {
            root,
            config_file,
            profiles_dir,
        }
    }

    /// Paths rooted at the directory containing the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe
            .parent()
            .ok_or_else(|| Error::InstallDir(exe.display().to_string()))?;
        Ok(Self::new(root.to_path_buf()))
    }
}
