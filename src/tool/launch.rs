//! Running yt-dlp with a selected profile.

use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};

const CHUNK_SIZE: usize = 512;

/// The external yt-dlp binary.
#[derive(Debug)]
pub struct Downloader {
    path: PathBuf,
}

impl Downloader {
    /// Wraps the yt-dlp binary at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Checks that the configured binary still exists as a regular file.
    ///
    /// # Errors
    /// Returns [`Error::ToolMissing`] otherwise.
    pub fn ensure_installed(&self) -> Result<()> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(Error::ToolMissing(self.path.clone()))
        }
    }

    /// Builds the yt-dlp invocation: its own config discovery disabled, `profile`
    /// loaded explicitly, and `target` as the only other argument.
    pub fn command(&self, profile: &Path, target: &str) -> Command {
        let mut cmd = Command::new(&self.path);
        cmd.arg("--ignore-config")
            .arg("--config-location")
            .arg(profile)
            .arg(target);
        cmd
    }

    /// Runs yt-dlp, mirroring its stdout into `out` as it arrives.
    ///
    /// stderr and stdin are inherited.
    ///
    /// # Errors
    /// Returns an IO error if yt-dlp cannot be started or its output cannot be
    /// relayed, and [`Error::ToolFailed`] if it exits unsuccessfully.
    pub fn run<W: Write + Send>(&self, profile: &Path, target: &str, out: &mut W) -> Result<()> {
        let mut cmd = self.command(profile, target);
        cmd.stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .stdin(Stdio::inherit());
        debug!(command = ?cmd, "launching yt-dlp");

        let mut child = cmd
            .spawn()
            .map_err(|e| Error::file("launch", &self.path, e))?;
        let stdout = child.stdout.take();

        let (status, relayed) = std::thread::scope(|scope| {
            let relay = scope.spawn(move || match stdout {
                Some(stdout) => relay_output(stdout, out),
                None => Ok(()),
            });
            let status = child.wait();
            let relayed = relay
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("output relay panicked")));
            (status, relayed)
        });

        let status = status?;
        relayed?;
        info!(%status, "yt-dlp finished");

        if status.success() {
            Ok(())
        } else {
            Err(Error::ToolFailed(status))
        }
    }
}

/// Copies `input` to `out` in small chunks until end of stream.
fn relay_output<R: Read, W: Write>(mut input: R, out: &mut W) -> std::io::Result<()> {
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        out.write_all(&buf[..n])?;
        out.flush()?;
    }
}
