//! Extracted albums and track discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::audio::is_track_file;

/// One imported archive's extracted contents
///
/// Read-only to the edit pipeline. `tracks` is sorted by path, so track
/// order is stable from extraction through to the library copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// File name of the archive the album came from
    pub original_name: String,
    /// Directory the archive was unpacked into
    pub working_dir: PathBuf,
    pub tracks: Vec<PathBuf>,
}

impl Album {
    /// Build an album from the tracks found under `working_dir`
    pub fn from_dir(original_name: impl Into<String>, working_dir: &Path) -> Self {
        Self {
            original_name: original_name.into(),
            working_dir: working_dir.to_path_buf(),
            tracks: find_tracks(working_dir),
        }
    }
}

/// Find all track files under `dir`, sorted by path
///
/// Descends into subdirectories since archives often wrap their tracks in
/// a top-level folder.
pub fn find_tracks(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return vec![];
    }

    let mut tracks: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_track_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    // Sort for consistent ordering
    tracks.sort();
    tracks
}
