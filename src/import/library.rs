//! Copying edited albums into the library
//!
//! Layout: `root/<Artist>/<Album>/NN - <Title>.mp3`, numbered by track
//! position.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::TRACK_EXTENSION;
use crate::core::Album;
use crate::edit::{check_correspondence, EditSet, EditableAlbum};
use crate::error::{ImportError, Result};

/// Make a metadata value usable as a single path component
///
/// Separators and characters most filesystems reject become `_`; a value
/// that ends up empty or as `.`/`..` becomes `Unknown`.
pub fn sanitize_component(value: &str) -> String {
    let sanitized: String = value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let sanitized = sanitized.trim();

    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        "Unknown".to_string()
    } else {
        sanitized.to_string()
    }
}

/// Destination file name for the track at `index` (zero-based)
pub fn track_file_name(index: usize, title: &str) -> String {
    format!(
        "{:02} - {}.{}",
        index + 1,
        sanitize_component(title),
        TRACK_EXTENSION
    )
}

/// Destination directory for an album
pub fn album_dir(root: &Path, edit: &EditableAlbum) -> PathBuf {
    root.join(sanitize_component(&edit.artist))
        .join(sanitize_component(&edit.album_title))
}

fn copy_album(root: &Path, album: &Album, edit: &EditableAlbum) -> Result<Vec<PathBuf>> {
    let dir = album_dir(root, edit);
    log::info!("Creating destination directory: {}", dir.display());
    fs::create_dir_all(&dir).map_err(|e| ImportError::io(&dir, e))?;

    let mut copied = Vec::with_capacity(album.tracks.len());
    for (i, (track, title)) in album.tracks.iter().zip(&edit.track_titles).enumerate() {
        let dst = dir.join(track_file_name(i, title));
        log::debug!("Copying {} -> {}", track.display(), dst.display());
        fs::copy(track, &dst).map_err(|e| ImportError::Copy {
            from: track.clone(),
            to: dst.clone(),
            source: e,
        })?;
        copied.push(dst);
    }

    Ok(copied)
}

/// Copy every album's tracks into the library, named from the edit set
///
/// Returns the destination paths in album and track order.
pub fn copy_albums(root: &Path, albums: &[Album], set: &EditSet) -> Result<Vec<PathBuf>> {
    check_correspondence(set, albums)?;

    let mut copied = Vec::new();
    for (album, edit) in albums.iter().zip(&set.albums) {
        copied.extend(copy_album(root, album, edit)?);
    }

    log::info!("Copied {} track(s) into {}", copied.len(), root.display());
    Ok(copied)
}
