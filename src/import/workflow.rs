//! Import workflow execution
//!
//! Runs one import from archives to library:
//! 1. Lock the work directory
//! 2. Extract every archive
//! 3. Build the edit set and let the user review it (or load a saved document)
//! 4. Write the edited tags
//! 5. Copy the tracks into the library
//! 6. Remove the work directory
//!
//! Tags are only written once the whole edit set is in hand, so a failed
//! editor session leaves every track untouched.

use std::fs;
use std::path::PathBuf;

use super::extract::extract_albums;
use super::library::copy_albums;
use super::lock::WorkDirLock;
use crate::core::{Album, ImportConfig};
use crate::edit::{apply, materialize, read_document, resolve_editor, review, EditSet};
use crate::error::Result;

fn load_edit_set(config: &ImportConfig, albums: &[Album]) -> Result<EditSet> {
    if let Some(document) = &config.resume_from {
        log::info!("Resuming from edit document: {}", document.display());
        return read_document(document);
    }

    let set = materialize(albums)?;
    let editor = resolve_editor(config.editor.as_deref())?;
    review(&set, &config.work_dir, &editor)
}

fn execute(config: &ImportConfig) -> Result<Vec<PathBuf>> {
    let albums = extract_albums(&config.work_dir, &config.archives)?;
    let set = load_edit_set(config, &albums)?;
    apply(&set, &albums)?;
    copy_albums(&config.root, &albums, &set)
}

/// Run a full import and return the library paths written
pub fn run(config: &ImportConfig) -> Result<Vec<PathBuf>> {
    let lock = WorkDirLock::acquire(&config.work_dir)?;

    let result = execute(config);
    drop(lock);

    match &result {
        Ok(copied) => {
            log::info!("Imported {} track(s)", copied.len());
            if let Err(e) = fs::remove_dir_all(&config.work_dir) {
                log::warn!(
                    "Failed to remove work directory {}: {}",
                    config.work_dir.display(),
                    e
                );
            }
        }
        Err(_) => {
            let document = config
                .resume_from
                .clone()
                .unwrap_or_else(|| config.edit_document());
            if document.exists() {
                log::error!(
                    "Edit document kept at {}; rerun with --resume-from {} to reuse it",
                    document.display(),
                    document.display()
                );
            }
        }
    }

    result
}
