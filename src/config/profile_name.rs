//! Validated profile names.

use std::fmt;

use crate::error::{Error, Result};

/// Extension every managed profile file carries.
pub const PROFILE_EXTENSION: &str = "conf";

/// Name of a managed profile, without the `.conf` extension.
///
/// The name is used verbatim as a file stem inside the managed directory, so it
/// must not contain path separators or be a relative path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    /// Validates and wraps a profile name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidProfileName`] for empty names, `.`/`..`, or names
    /// containing `/` or `\`.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::InvalidProfileName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name inside the managed directory: `<name>.conf`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, PROFILE_EXTENSION)
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips one trailing `.conf` from a managed file name, if present.
pub fn strip_extension(file_name: &str) -> &str {
    file_name
        .strip_suffix(PROFILE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(file_name)
}
