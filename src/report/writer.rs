//! Report output
//!
//! Writes rendered text, creating parent directories on the way. When the
//! destination denies permission the bare file name is retried once in the
//! current directory before the failure surfaces.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write `content` to `path`. Returns the path actually written, which is
/// the cwd fallback when the destination was not writable.
pub fn write_report(path: &Path, content: &str, fallback_to_cwd: bool) -> Result<PathBuf> {
    match try_write(path, content) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(err) if fallback_to_cwd && err.kind() == ErrorKind::PermissionDenied => {
            tracing::warn!(
                "Permission denied writing {}, retrying in current directory",
                path.display()
            );
            let fallback = PathBuf::from(path.file_name().unwrap_or(path.as_os_str()));
            fs::write(&fallback, content).with_context(|| {
                format!(
                    "Failed to write report to {} or fallback {}",
                    path.display(),
                    fallback.display()
                )
            })?;
            Ok(fallback)
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to write report to {}", path.display()))
        }
    }
}

fn try_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}
