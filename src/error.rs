//! Error types for yt-dlp-switcher.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias using the switcher's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Where a requested profile name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// The `default_profile` stored in the configuration record.
    Default,
    /// A name passed explicitly with `-c`.
    Override,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Override => f.write_str("supplied"),
        }
    }
}

/// Errors that can occur in yt-dlp-switcher.
#[derive(Error, Debug)]
pub enum Error {
    /// The directory holding the switcher could not be determined.
    #[error("cannot determine install directory: {0}")]
    InstallDir(String),

    /// A file operation failed on a specific path.
    #[error("failed to {action} {}: {source}", .path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// TOML encoding error.
    #[error(transparent)]
    TomlEncode(#[from] toml::ser::Error),

    /// The user declined to supply a yt-dlp location during setup.
    #[error("yt-dlp location was not provided, setup aborted")]
    SetupDeclined,

    /// The configured yt-dlp binary is gone or is not a file.
    #[error("configured yt-dlp binary not found at {}; run with --setup or edit config.toml", .0.display())]
    ToolMissing(PathBuf),

    /// No `-c` was given and the stored default does not resolve.
    #[error(
        "default profile is not configured; supply one with -c <name> or set default_profile in config.toml"
    )]
    DefaultNotConfigured,

    /// An explicitly requested profile does not exist.
    #[error("supplied profile '{0}' could not be found")]
    ProfileNotFound(String),

    /// The resolved profile path is a directory.
    #[error("{origin} profile '{name}' is a directory, not a valid profile")]
    ProfileIsDirectory { name: String, origin: ProfileSource },

    /// Profile name contains path components or is empty.
    #[error("invalid profile name: '{0}'")]
    InvalidProfileName(String),

    /// A launch was requested without anything to hand to yt-dlp.
    #[error("no target given; pass a URL for yt-dlp as the last argument")]
    MissingTarget,

    /// Terminal input ended while a prompt was waiting.
    #[error("input closed while waiting for an answer")]
    InputClosed,

    /// yt-dlp ran but exited unsuccessfully.
    #[error("yt-dlp exited with {0}")]
    ToolFailed(ExitStatus),
}

impl Error {
    pub(crate) fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            action,
            path: path.into(),
            source,
        }
    }
}
