//! The switcher's own configuration record.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Persisted switcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SwitcherConfig {
    /// Absolute path to the yt-dlp binary.
    #[serde(default, alias = "YtdlpPath")]
    pub ytdlp_path: PathBuf,

    /// Default profile file name, always including the `.conf` extension.
    #[serde(default, alias = "DefaultConfig", skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
}

impl SwitcherConfig {
    /// Creates a record pointing at the given yt-dlp binary with no default profile.
    pub fn new(ytdlp_path: PathBuf) -> Self {
        Self {
            ytdlp_path,
            default_profile: None,
        }
    }

    /// Loads the record from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::file("read", path, e))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the record to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::file("write", path, e))?;
        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Returns the configured default profile, treating an empty value as unset.
    pub fn default_profile(&self) -> Option<&str> {
        self.default_profile.as_deref().filter(|name| !name.is_empty())
    }

    pub fn set_default_profile(&mut self, file_name: impl Into<String>) {
        self.default_profile = Some(file_name.into());
    }
}
