//! Integration with the external yt-dlp binary.

mod launch;
mod locate;
mod probe;

pub use launch::Downloader;
pub use locate::{find_tool, search_path};
pub use probe::{ProbeRoots, find_configs};
