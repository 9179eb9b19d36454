//! Profile management for yt-dlp configuration files.
//!
//! This module provides [`ProfileManager`], which owns the managed profile directory:
//! listing profiles, resolving a requested profile to a file, picking a default and
//! importing discovered yt-dlp configs.

mod import;

pub use import::RenameMap;

use std::path::{Path, PathBuf};

use tracing::debug;

use super::profile_name::{ProfileName, strip_extension};
use crate::error::{Error, ProfileSource, Result};

/// A profile the user asked to launch with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRequest {
    /// The stored default, already carrying its extension.
    Default(String),
    /// A name passed with `-c`.
    Override(ProfileName),
}

impl ProfileRequest {
    /// Picks the request from an optional `-c` value and the stored default.
    ///
    /// A `-c` value equal to the stored default is treated as the default itself.
    ///
    /// # Errors
    /// Returns [`Error::DefaultNotConfigured`] when neither is set, or
    /// [`Error::InvalidProfileName`] for a malformed `-c` value.
    pub fn select(explicit: Option<&str>, default: Option<&str>) -> Result<Self> {
        match (explicit, default) {
            (Some(name), Some(default)) if name == default => Ok(Self::Default(default.to_string())),
            (Some(name), _) => Ok(Self::Override(ProfileName::new(name)?)),
            (None, Some(default)) => {
                ProfileName::new(default)?;
                Ok(Self::Default(default.to_string()))
            }
            (None, None) => Err(Error::DefaultNotConfigured),
        }
    }

    /// File name looked up inside the managed directory.
    pub fn file_name(&self) -> String {
        match self {
            Self::Default(file_name) => file_name.clone(),
            Self::Override(name) => name.file_name(),
        }
    }

    fn origin(&self) -> ProfileSource {
        match self {
            Self::Default(_) => ProfileSource::Default,
            Self::Override(_) => ProfileSource::Override,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Default(file_name) => file_name,
            Self::Override(name) => name.as_str(),
        }
    }
}

/// Manages the directory of yt-dlp profile files.
///
/// # Directory Structure
///
/// ```text
/// yt-dlp configs/
/// ├── music.conf
/// ├── video.conf
/// └── yt-dlp.conf
/// ```
#[derive(Debug)]
pub struct ProfileManager {
    profiles_dir: PathBuf,
}

impl ProfileManager {
    /// Creates a new profile manager for the given directory.
    pub fn new(profiles_dir: PathBuf) -> Self {
        Self { profiles_dir }
    }

    /// Returns the managed profile directory.
    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }

    /// Creates the managed directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.profiles_dir.is_dir() {
            return Ok(());
        }

        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(&self.profiles_dir)
            .map_err(|e| Error::file("create", &self.profiles_dir, e))?;
        debug!(dir = %self.profiles_dir.display(), "created profile directory");
        Ok(())
    }

    /// Names of every entry in the managed directory, in directory-listing order.
    ///
    /// A missing directory has no entries.
    pub fn entries(&self) -> Result<Vec<String>> {
        self.read_entries(false)
    }

    /// Profile names as shown to the user: entry names with `.conf` stripped.
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .iter()
            .map(|entry| strip_extension(entry).to_string())
            .collect())
    }

    /// Regular `.conf` files in the managed directory, in directory-listing order.
    ///
    /// These are the only entries that can be designated as the default.
    pub fn profile_files(&self) -> Result<Vec<String>> {
        let mut files = self.read_entries(true)?;
        files.retain(|file| is_profile_file(file));
        Ok(files)
    }

    fn read_entries(&self, files_only: bool) -> Result<Vec<String>> {
        if !self.profiles_dir.exists() {
            return Ok(Vec::new());
        }

        let read_dir = std::fs::read_dir(&self.profiles_dir)
            .map_err(|e| Error::file("read", &self.profiles_dir, e))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry?;
            if files_only && !entry.file_type()?.is_file() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Resolves a request to the profile file it names.
    ///
    /// # Errors
    /// - [`Error::DefaultNotConfigured`] if the default is missing
    /// - [`Error::ProfileNotFound`] if a `-c` profile is missing
    /// - [`Error::ProfileIsDirectory`] if the path is a directory
    pub fn resolve(&self, request: &ProfileRequest) -> Result<PathBuf> {
        let path = self.profiles_dir.join(request.file_name());

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Err(Error::ProfileIsDirectory {
                name: request.name().to_string(),
                origin: request.origin(),
            }),
            Ok(_) => {
                debug!(profile = %path.display(), "resolved profile");
                Ok(path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => match request {
                ProfileRequest::Default(_) => Err(Error::DefaultNotConfigured),
                ProfileRequest::Override(name) => {
                    Err(Error::ProfileNotFound(name.as_str().to_string()))
                }
            },
            Err(e) => Err(Error::file("read", &path, e)),
        }
    }

    /// Answers accepted when choosing a default: each `.conf` file's full name
    /// and its name without extension. Other entries are not offered.
    pub fn default_choices(files: &[String]) -> Vec<String> {
        let files: Vec<&String> = files.iter().filter(|f| is_profile_file(f)).collect();
        let mut choices: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        for file in files {
            let stem = strip_extension(file);
            if !choices.iter().any(|c| c == stem) {
                choices.push(stem.to_string());
            }
        }
        choices
    }

    /// Maps a default-profile answer to the `.conf` file it designates.
    ///
    /// The result always carries the extension, so it resolves the same way the
    /// listing presents it.
    pub fn normalize_default(files: &[String], answer: &str) -> Option<String> {
        let mut files = files.iter().filter(|f| is_profile_file(f));
        files
            .clone()
            .find(|f| *f == answer)
            .or_else(|| files.find(|f| strip_extension(f) == answer))
            .cloned()
    }

    /// Validates a default-profile choice against the profile files on disk.
    ///
    /// # Errors
    /// Returns [`Error::ProfileNotFound`] if no profile file matches.
    pub fn choose_default(&self, answer: &str) -> Result<String> {
        let files = self.profile_files()?;
        Self::normalize_default(&files, answer)
            .ok_or_else(|| Error::ProfileNotFound(answer.to_string()))
    }
}

fn is_profile_file(name: &str) -> bool {
    let stem = strip_extension(name);
    stem != name && !stem.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manager_with(files: &[&str]) -> (TempDir, ProfileManager) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("yt-dlp configs");
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), format!("# {file}")).unwrap();
        }
        (temp, ProfileManager::new(dir))
    }

    #[test]
    fn list_profiles_strips_extension() {
        let (_temp, manager) = manager_with(&["alpha.conf", "beta.conf"]);

        let mut profiles = manager.list_profiles().unwrap();
        profiles.sort();

        assert_eq!(profiles, vec!["alpha", "beta"]);
    }

    #[test]
    fn list_profiles_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp.path().join("nope"));

        assert!(manager.list_profiles().unwrap().is_empty());
    }

    #[test]
    fn resolves_default_without_override() {
        let (_temp, manager) = manager_with(&["alpha.conf", "beta.conf"]);

        let request = ProfileRequest::select(None, Some("alpha.conf")).unwrap();
        let path = manager.resolve(&request).unwrap();

        assert_eq!(path, manager.profiles_dir().join("alpha.conf"));
    }

    #[test]
    fn resolves_override_by_name() {
        let (_temp, manager) = manager_with(&["alpha.conf", "beta.conf"]);

        let request = ProfileRequest::select(Some("beta"), Some("alpha.conf")).unwrap();
        let path = manager.resolve(&request).unwrap();

        assert_eq!(path, manager.profiles_dir().join("beta.conf"));
    }

    #[test]
    fn override_equal_to_default_is_the_default() {
        let request = ProfileRequest::select(Some("alpha.conf"), Some("alpha.conf")).unwrap();
        assert_eq!(request, ProfileRequest::Default("alpha.conf".to_string()));
        assert_eq!(request.file_name(), "alpha.conf");
    }

    #[test]
    fn missing_override_is_not_found() {
        let (_temp, manager) = manager_with(&["alpha.conf", "beta.conf"]);

        let request = ProfileRequest::select(Some("gamma"), Some("alpha.conf")).unwrap();
        let err = manager.resolve(&request).unwrap_err();

        assert!(matches!(err, Error::ProfileNotFound(name) if name == "gamma"));
    }

    #[test]
    fn missing_default_is_not_configured() {
        let (_temp, manager) = manager_with(&["beta.conf"]);

        let request = ProfileRequest::select(None, Some("alpha.conf")).unwrap();
        assert!(matches!(
            manager.resolve(&request),
            Err(Error::DefaultNotConfigured)
        ));
    }

    #[test]
    fn no_default_and_no_override_is_not_configured() {
        assert!(matches!(
            ProfileRequest::select(None, None),
            Err(Error::DefaultNotConfigured)
        ));
    }

    #[test]
    fn directory_profiles_are_rejected_with_origin() {
        let (_temp, manager) = manager_with(&[]);
        fs::create_dir_all(manager.profiles_dir().join("nested.conf")).unwrap();

        let default = ProfileRequest::select(None, Some("nested.conf")).unwrap();
        assert!(matches!(
            manager.resolve(&default),
            Err(Error::ProfileIsDirectory {
                origin: ProfileSource::Default,
                ..
            })
        ));

        let explicit = ProfileRequest::select(Some("nested"), None).unwrap();
        assert!(matches!(
            manager.resolve(&explicit),
            Err(Error::ProfileIsDirectory {
                origin: ProfileSource::Override,
                ..
            })
        ));
    }

    #[test]
    fn default_choices_include_stems() {
        let files = vec!["alpha.conf".to_string(), "beta.conf".to_string()];
        let choices = ProfileManager::default_choices(&files);

        assert_eq!(choices, vec!["alpha.conf", "beta.conf", "alpha", "beta"]);
    }

    #[test]
    fn extensionless_files_are_not_default_choices() {
        let files = vec![
            "alpha.conf".to_string(),
            "notes".to_string(),
            "alpha".to_string(),
        ];

        assert_eq!(
            ProfileManager::default_choices(&files),
            vec!["alpha.conf", "alpha"]
        );
        assert_eq!(
            ProfileManager::normalize_default(&files, "alpha"),
            Some("alpha.conf".to_string())
        );
        assert_eq!(ProfileManager::normalize_default(&files, "notes"), None);
    }

    #[test]
    fn chosen_default_resolves_like_the_listing() {
        let (_temp, manager) = manager_with(&["alpha.conf", "notes"]);

        assert!(matches!(
            manager.choose_default("notes"),
            Err(Error::ProfileNotFound(_))
        ));

        let default = manager.choose_default("alpha").unwrap();
        let request = ProfileRequest::select(None, Some(&default)).unwrap();
        assert_eq!(
            manager.resolve(&request).unwrap(),
            manager.profiles_dir().join("alpha.conf")
        );
    }

    #[test]
    fn normalize_default_always_carries_extension() {
        let files = vec!["alpha.conf".to_string(), "beta.conf".to_string()];

        assert_eq!(
            ProfileManager::normalize_default(&files, "alpha"),
            Some("alpha.conf".to_string())
        );
        assert_eq!(
            ProfileManager::normalize_default(&files, "beta.conf"),
            Some("beta.conf".to_string())
        );
        assert_eq!(ProfileManager::normalize_default(&files, "gamma"), None);
    }

    #[test]
    fn choose_default_ignores_directories() {
        let (_temp, manager) = manager_with(&["alpha.conf"]);
        fs::create_dir_all(manager.profiles_dir().join("dir.conf")).unwrap();

        assert_eq!(manager.choose_default("alpha").unwrap(), "alpha.conf");
        assert!(matches!(
            manager.choose_default("dir"),
            Err(Error::ProfileNotFound(_))
        ));
    }
}
