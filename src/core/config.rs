//! Import run settings
//!
//! Gathered from the command line (and `EDITOR`) by `main`, then handed to
//! the workflow. Nothing below `main` reads the environment itself.

use std::path::PathBuf;

/// Name of the scratch edit document inside the work directory
pub const EDIT_DOCUMENT_NAME: &str = "edit.toml";

/// Settings for one import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Library root; albums land in `root/Artist/Album/`
    pub root: PathBuf,
    /// Scratch space for extraction and the edit document
    pub work_dir: PathBuf,
    /// Editor command preference (e.g. from `EDITOR`); `None` uses the default
    pub editor: Option<String>,
    /// Apply this already-edited document instead of opening an editor
    pub resume_from: Option<PathBuf>,
    /// Archives to import, in order
    pub archives: Vec<PathBuf>,
}

impl ImportConfig {
    /// Path of the scratch edit document for this run
    pub fn edit_document(&self) -> PathBuf {
        self.work_dir.join(EDIT_DOCUMENT_NAME)
    }
}

#[cfg(test)]
impl ImportConfig {
    pub fn new(archives: Vec<PathBuf>) -> Self {
        Self {
            root: PathBuf::from("."),
            work_dir: default_work_dir(),
            editor: None,
            resume_from: None,
            archives,
        }
    }
}

/// Default work directory in the system temp dir
pub fn default_work_dir() -> PathBuf {
    std::env::temp_dir().join("bci")
}
