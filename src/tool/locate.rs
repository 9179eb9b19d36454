//! Finding the yt-dlp executable on the search path.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// File names recognised as the yt-dlp executable.
pub const TOOL_NAMES: [&str; 2] = ["yt-dlp", "yt-dlp.exe"];

/// Directories listed in `PATH`, in order. Empty when `PATH` is unset.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Returns the first file named like yt-dlp across `dirs`, scanned in order.
///
/// Directories that do not exist are skipped, as are matching entries that are
/// not files (symlinks are followed). The hit is made absolute so it stays valid
/// from any working directory. Finding nothing is `Ok(None)`.
///
/// # Errors
/// Any other failure to read a directory is returned as-is.
pub fn find_tool<I, P>(dirs: I) -> Result<Option<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for dir in dirs {
        let dir = dir.as_ref();
        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "skipping missing search directory");
                continue;
            }
            Err(e) => return Err(Error::file("read", dir, e)),
        };

        for entry in read_dir {
            let entry = entry?;
            let name = entry.file_name();
            if !is_tool_name(&name) {
                continue;
            }
            let found = dir.join(name);
            if !found.is_file() {
                debug!(path = %found.display(), "skipping non-file yt-dlp entry");
                continue;
            }
            let found = std::path::absolute(&found)?;
            debug!(path = %found.display(), "found yt-dlp");
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn is_tool_name(name: &OsStr) -> bool {
    TOOL_NAMES.iter().any(|candidate| name == *candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_tool_in_later_directory() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        let bin = temp.path().join("bin");
        fs::create_dir_all(&empty).unwrap();
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("yt-dlp"), "").unwrap();

        let found = find_tool([&empty, &bin]).unwrap();

        assert_eq!(found, Some(bin.join("yt-dlp")));
    }

    #[test]
    fn first_directory_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        fs::write(first.join("yt-dlp.exe"), "").unwrap();
        fs::write(second.join("yt-dlp"), "").unwrap();

        let found = find_tool([&first, &second]).unwrap();

        assert_eq!(found, Some(first.join("yt-dlp.exe")));
    }

    #[test]
    fn missing_directories_are_skipped() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("yt-dlp"), "").unwrap();

        let found = find_tool([temp.path().join("does-not-exist"), bin.clone()]).unwrap();

        assert_eq!(found, Some(bin.join("yt-dlp")));
    }

    #[test]
    fn no_match_is_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yt-dlp-old"), "").unwrap();
        fs::write(temp.path().join("ffmpeg"), "").unwrap();

        let found = find_tool([temp.path(), Path::new("/definitely/not/here")]).unwrap();

        assert_eq!(found, None);
    }

    #[test]
    fn directory_named_like_tool_is_skipped() {
        let temp = TempDir::new().unwrap();
        let checkout = temp.path().join("src");
        let bin = temp.path().join("bin");
        fs::create_dir_all(checkout.join("yt-dlp")).unwrap();
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("yt-dlp"), "").unwrap();

        assert_eq!(find_tool([&checkout]).unwrap(), None);
        assert_eq!(find_tool([&checkout, &bin]).unwrap(), Some(bin.join("yt-dlp")));
    }

    #[test]
    fn relative_search_entry_gives_absolute_path() {
        let temp = TempDir::new_in(".").unwrap();
        fs::write(temp.path().join("yt-dlp"), "").unwrap();
        let cwd = std::env::current_dir().unwrap();
        let relative = temp.path().strip_prefix(&cwd).unwrap();
        assert!(relative.is_relative());

        let found = find_tool([relative]).unwrap().unwrap();

        assert!(found.is_absolute());
        assert!(found.is_file());
        assert_eq!(found, cwd.join(relative).join("yt-dlp"));
    }

    #[test]
    fn unreadable_search_entry_is_an_error() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("yt-dlp-notes.txt");
        fs::write(&not_a_dir, "").unwrap();

        let err = find_tool([&not_a_dir]).unwrap_err();

        assert!(matches!(err, Error::File { action: "read", .. }));
    }

    #[test]
    fn empty_search_path_is_none() {
        let dirs: Vec<PathBuf> = Vec::new();
        assert_eq!(find_tool(dirs).unwrap(), None);
    }
}
