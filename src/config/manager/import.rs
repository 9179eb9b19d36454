//! Copying discovered yt-dlp configs into the managed directory.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ProfileManager;
use crate::config::profile_name::ProfileName;
use crate::error::{Error, Result};

/// User-chosen profile names keyed by discovered source path.
pub type RenameMap = HashMap<PathBuf, ProfileName>;

impl ProfileManager {
    /// Copies each source file verbatim into the managed directory.
    ///
    /// Destination is `<name>.conf`, where `<name>` comes from `names` when the source
    /// has an entry there and otherwise is the source file name minus its last
    /// extension. Existing destinations are overwritten.
    ///
    /// Returns the written destination paths in source order.
    ///
    /// # Errors
    /// Stops at the first file that cannot be read or written. Files copied before
    /// the failure stay in place.
    pub fn import(&self, sources: &[PathBuf], names: Option<&RenameMap>) -> Result<Vec<PathBuf>> {
        self.ensure_dir()?;

        let mut written = Vec::with_capacity(sources.len());
        let mut seen = HashSet::new();
        for source in sources {
            let name = match names.and_then(|map| map.get(source)) {
                Some(name) => name.clone(),
                None => derived_name(source)?,
            };
            let destination = self.profiles_dir.join(name.file_name());

            if !seen.insert(destination.clone()) {
                warn!(
                    source = %source.display(),
                    destination = %destination.display(),
                    "overwriting profile imported earlier in this run"
                );
            }

            let bytes = std::fs::read(source).map_err(|e| Error::file("read", source, e))?;
            std::fs::write(&destination, bytes)
                .map_err(|e| Error::file("write", &destination, e))?;
            debug!(
                source = %source.display(),
                destination = %destination.display(),
                "imported profile"
            );
            written.push(destination);
        }
        Ok(written)
    }
}

/// Profile name for an unrenamed source: its file name minus the last extension.
fn derived_name(source: &Path) -> Result<ProfileName> {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    ProfileName::new(&stem)
}
