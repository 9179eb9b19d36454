//! Configuration management for yt-dlp-switcher.

mod manager;
mod paths;
mod profile_name;
mod switcher;

pub use manager::{ProfileManager, ProfileRequest, RenameMap};
pub use paths::AppPaths;
pub use profile_name::{ProfileName, strip_extension};
pub use switcher::SwitcherConfig;
