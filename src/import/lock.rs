//! Exclusive use of a work directory
//!
//! A lock file is created with `create_new` when a run starts and removed
//! when the guard drops, on success and failure alike. A second import
//! pointed at the same work directory fails instead of clobbering the
//! first one's edit document.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ImportError, Result};

const LOCK_FILE_NAME: &str = ".album-import.lock";

#[derive(Debug)]
pub struct WorkDirLock {
    path: PathBuf,
}

impl WorkDirLock {
    /// Create the work directory if needed and take the lock
    pub fn acquire(work_dir: &Path) -> Result<Self> {
        fs::create_dir_all(work_dir).map_err(|e| ImportError::io(work_dir, e))?;

        let path = work_dir.join(LOCK_FILE_NAME);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ImportError::WorkDirLocked(work_dir.to_path_buf()));
            }
            Err(e) => return Err(ImportError::io(&path, e)),
        };

        // Informational only
        let _ = writeln!(file, "{}", std::process::id());

        log::debug!("Locked work directory: {}", work_dir.display());
        Ok(Self { path })
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkDirLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("Failed to remove lock file {}: {}", self.path.display(), e);
            }
        }
    }
}
