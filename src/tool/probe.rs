//! Probing well-known locations for existing yt-dlp configuration files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Roots that may hold yt-dlp configs, one per probe stage.
///
/// An unset root skips its stage.
#[derive(Debug, Clone, Default)]
pub struct ProbeRoots {
    pub xdg_config_home: Option<PathBuf>,
    pub appdata: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub system: Option<PathBuf>,
}

/// Overrides the system-wide config root (`/etc` by default). Set it empty to
/// skip the system stage.
pub const SYSTEM_ROOT_ENV: &str = "YTDLP_SWITCHER_SYSTEM_CONFIG_DIR";

const DEFAULT_SYSTEM_ROOT: &str = "/etc";

impl ProbeRoots {
    /// Roots taken from `XDG_CONFIG_HOME`, `APPDATA` and `HOME`, plus the system
    /// root. Empty variables count as unset.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    /// Same as [`ProbeRoots::from_env`], reading variables through `var`.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let dir = |key: &str| var(key).filter(|value| !value.is_empty()).map(PathBuf::from);
        let system = match var(SYSTEM_ROOT_ENV) {
            Some(value) if value.is_empty() => None,
            Some(value) => Some(PathBuf::from(value)),
            None => Some(PathBuf::from(DEFAULT_SYSTEM_ROOT)),
        };
        debug!(system = ?system, "system config root");

        Self {
            xdg_config_home: dir("XDG_CONFIG_HOME"),
            appdata: dir("APPDATA"),
            home: dir("HOME"),
            system,
        }
    }
}

/// Every candidate path, in probe order, whether it exists or not.
pub fn candidates(tool_dir: Option<&Path>, roots: &ProbeRoots) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = tool_dir {
        paths.push(dir.join("yt-dlp.conf"));
    }
    if let Some(xdg) = &roots.xdg_config_home {
        paths.extend(nested_candidates(xdg));
    }
    if let Some(appdata) = &roots.appdata {
        paths.extend(nested_candidates(appdata));
    }
    if let Some(home) = &roots.home {
        paths.push(home.join("yt-dlp.conf"));
        paths.push(home.join("yt-dlp.conf.txt"));
        paths.push(home.join(".yt-dlp").join("config"));
        paths.push(home.join(".yt-dlp").join("config.txt"));
    }
    if let Some(system) = &roots.system {
        paths.extend(nested_candidates(system));
    }
    paths
}

fn nested_candidates(root: &Path) -> [PathBuf; 3] {
    [
        root.join("yt-dlp.conf"),
        root.join("yt-dlp").join("config"),
        root.join("yt-dlp").join("config.txt"),
    ]
}

/// Existing config files in probe order, duplicates removed (first one kept).
///
/// `tool_dir` is the directory holding the yt-dlp binary. Nothing found is an
/// empty vector.
pub fn find_configs(tool_dir: Option<&Path>, roots: &ProbeRoots) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();
    for candidate in candidates(tool_dir, roots) {
        if candidate.exists() && !found.contains(&candidate) {
            debug!(path = %candidate.display(), "found yt-dlp config");
            found.push(candidate);
        }
    }
    found
}
