//! Writing edited metadata back onto the track files
//!
//! Albums and tracks are matched purely by position. The whole edit set is
//! checked against the album list before the first tag is written, so a
//! document with a missing, extra or moved record fails without touching
//! any file.

use chrono::{DateTime, Local};

use super::model::{EditSet, EditableAlbum};
use crate::audio::{write_tags, TagUpdate};
use crate::core::Album;
use crate::error::{ImportError, Mismatch, Result};

/// Verify that `set` lines up with `albums` album for album and track for track
pub fn check_correspondence(set: &EditSet, albums: &[Album]) -> Result<()> {
    if set.albums.len() != albums.len() {
        return Err(ImportError::CorrespondenceMismatch(Mismatch::AlbumCount {
            edited: set.albums.len(),
            extracted: albums.len(),
        }));
    }

    for (i, (edit, album)) in set.albums.iter().zip(albums).enumerate() {
        if let Some(source) = &edit.source {
            if *source != album.original_name {
                return Err(ImportError::CorrespondenceMismatch(Mismatch::Source {
                    album: i,
                    edited: source.clone(),
                    extracted: album.original_name.clone(),
                }));
            }
        }

        if edit.track_titles.len() != album.tracks.len() {
            return Err(ImportError::CorrespondenceMismatch(Mismatch::TrackCount {
                album: i,
                edited: edit.track_titles.len(),
                extracted: album.tracks.len(),
            }));
        }
    }

    Ok(())
}

/// Comment recording where and when a track was imported
pub fn provenance_comment(original_name: &str, imported_at: DateTime<Local>) -> String {
    format!(
        "Imported by album-import from {} on {}",
        original_name,
        imported_at.to_rfc3339()
    )
}

fn apply_album(edit: &EditableAlbum, album: &Album, imported_at: DateTime<Local>) -> Result<()> {
    let comment = provenance_comment(&album.original_name, imported_at);

    for (track, title) in album.tracks.iter().zip(&edit.track_titles) {
        log::debug!("Updating tags: {}", track.display());
        let update = TagUpdate {
            artist: edit.artist.clone(),
            album: edit.album_title.clone(),
            genre: edit.genre.clone(),
            year: edit.year.clone(),
            title: title.clone(),
            album_artist: edit.artist.clone(),
            comment: comment.clone(),
        };
        write_tags(track, &update)?;
    }

    Ok(())
}

/// Write every album's edited metadata to its tracks, stamped with `imported_at`
pub fn apply_at(set: &EditSet, albums: &[Album], imported_at: DateTime<Local>) -> Result<()> {
    check_correspondence(set, albums)?;

    log::info!("Updating tags");
    for (edit, album) in set.albums.iter().zip(albums) {
        apply_album(edit, album, imported_at)?;
    }

    Ok(())
}

/// Write every album's edited metadata to its tracks
pub fn apply(set: &EditSet, albums: &[Album]) -> Result<()> {
    apply_at(set, albums, Local::now())
}
