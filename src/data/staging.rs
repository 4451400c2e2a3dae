//! Run-scoped on-disk staging for downloaded assets.
//!
//! The directory lives exactly as long as its `Staging` value, so it is removed
//! whether the run that created it succeeds or fails.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::error::AppError;

pub struct Staging {
    dir: Option<TempDir>,
    path: PathBuf,
    keep: bool,
}

impl Staging {
    /// Create a fresh staging directory under `root` (the system temp dir when
    /// `None`). With `keep`, it survives the run.
    pub fn new(root: Option<&Path>, keep: bool) -> Result<Self, AppError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("currency-data-");
        let dir = match root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| AppError::source_unavailable(format!("Failed to create staging dir: {e}")))?;
        let path = dir.path().to_path_buf();
        debug!(path = %path.display(), "staging created");
        Ok(Self {
            dir: Some(dir),
            path,
            keep,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `bytes` to `relative` under the staging root, creating parent dirs.
    pub fn write(&self, relative: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let target = self.path.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::source_unavailable(format!("Failed to create '{}': {e}", parent.display()))
            })?;
        }
        fs::write(&target, bytes)
            .map_err(|e| AppError::source_unavailable(format!("Failed to stage '{}': {e}", target.display())))?;
        Ok(target)
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        if self.keep {
            let path = dir.keep();
            info!(path = %path.display(), "staging kept");
        } else {
            // Removal errors are swallowed by TempDir.
            drop(dir);
            debug!(path = %self.path.display(), "staging removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_files_are_removed_on_drop() {
        let staging = Staging::new(None, false).unwrap();
        let file = staging.write("cldr-core/package.json", b"{}").unwrap();
        let root = staging.path().to_path_buf();
        assert!(file.is_file());

        drop(staging);

        assert!(!root.exists());
    }

    #[test]
    fn kept_staging_survives_drop() {
        let root = tempfile::tempdir().unwrap();
        let staging = Staging::new(Some(root.path()), true).unwrap();
        staging.write("a/b.json", b"[]").unwrap();
        let staged = staging.path().to_path_buf();

        drop(staging);

        assert!(staged.starts_with(root.path()));
        assert!(staged.join("a/b.json").is_file());
    }
}
