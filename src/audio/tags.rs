//! Tag access for track files
//!
//! Reads the handful of fields the importer edits and writes them back,
//! together with the album artist and an import comment. Only the tag block
//! is rewritten; the audio payload is left as it is.

use std::path::Path;

use lofty::{Accessor, ItemKey, Probe, Tag, TagExt, TaggedFileExt};

use crate::error::{ImportError, Result};

/// Fields read from a track's tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    pub title: String,
}

/// Fields written to a track's tag
///
/// Every field is written; an empty string removes the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUpdate {
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub year: String,
    pub title: String,
    pub album_artist: String,
    pub comment: String,
}

/// Remove the null padding tag formats leave at the end of text fields
pub fn strip_trailing_null(s: &str) -> String {
    s.trim_end_matches('\0').to_string()
}

fn clean(value: Option<std::borrow::Cow<'_, str>>) -> String {
    value.map(|v| strip_trailing_null(&v)).unwrap_or_default()
}

fn read_year(tag: &Tag) -> String {
    tag.get_string(&ItemKey::RecordingDate)
        .or_else(|| tag.get_string(&ItemKey::Year))
        .map(strip_trailing_null)
        .or_else(|| tag.year().map(|y| y.to_string()))
        .unwrap_or_default()
}

/// Read artist, album, genre, year and title from a track file
///
/// A valid file without any tag yields empty fields.
pub fn read_tags(path: &Path) -> Result<TrackTags> {
    let tag_read_error = |reason: String| ImportError::TagRead {
        path: path.to_path_buf(),
        reason,
    };

    let tagged_file = Probe::open(path)
        .map_err(|e| tag_read_error(format!("Failed to open file: {}", e)))?
        .read()
        .map_err(|e| tag_read_error(format!("Failed to read file: {}", e)))?;

    let tag = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        Some(tag) => tag,
        None => {
            log::debug!("No tag in {}", path.display());
            return Ok(TrackTags::default());
        }
    };

    Ok(TrackTags {
        artist: clean(tag.artist()),
        album: clean(tag.album()),
        genre: clean(tag.genre()),
        year: read_year(tag),
        title: clean(tag.title()),
    })
}

fn set_text(tag: &mut Tag, key: ItemKey, value: &str) {
    tag.remove_key(&key);
    if !value.is_empty() {
        tag.insert_text(key, value.to_string());
    }
}

/// Write all fields of `update` to the track file's primary tag
///
/// Creates the tag if the file has none. Any existing album artist is
/// dropped before the new one is set so the file never carries two.
pub fn write_tags(path: &Path, update: &TagUpdate) -> Result<()> {
    let tag_write_error = |reason: String| ImportError::TagWrite {
        path: path.to_path_buf(),
        reason,
    };

    let mut tagged_file = Probe::open(path)
        .map_err(|e| tag_write_error(format!("Failed to open file: {}", e)))?
        .read()
        .map_err(|e| tag_write_error(format!("Failed to read file: {}", e)))?;

    // Get or create the primary tag
    let tag = match tagged_file.primary_tag_mut() {
        Some(tag) => tag,
        None => {
            let tag_type = tagged_file.primary_tag_type();
            tagged_file.insert_tag(Tag::new(tag_type));
            tagged_file
                .primary_tag_mut()
                .ok_or_else(|| tag_write_error("Failed to create tag".to_string()))?
        }
    };

    set_text(tag, ItemKey::TrackArtist, &update.artist);
    set_text(tag, ItemKey::AlbumTitle, &update.album);
    set_text(tag, ItemKey::Genre, &update.genre);
    set_text(tag, ItemKey::TrackTitle, &update.title);

    tag.remove_key(&ItemKey::Year);
    set_text(tag, ItemKey::RecordingDate, &update.year);

    set_text(tag, ItemKey::AlbumArtist, &update.album_artist);
    set_text(tag, ItemKey::Comment, &update.comment);

    tag.save_to_path(path)
        .map_err(|e| tag_write_error(format!("Failed to save file: {}", e)))?;

    Ok(())
}

/// Read the album artist field (used to verify writes)
#[cfg(test)]
pub fn read_album_artist(path: &Path) -> Option<String> {
    let tagged_file = Probe::open(path).ok()?.read().ok()?;
    tagged_file
        .primary_tag()?
        .get_string(&ItemKey::AlbumArtist)
        .map(strip_trailing_null)
}

/// Read the comment field (used to verify writes)
#[cfg(test)]
pub fn read_comment(path: &Path) -> Option<String> {
    let tagged_file = Probe::open(path).ok()?.read().ok()?;
    tagged_file.primary_tag()?.comment().map(|c| strip_trailing_null(&c))
}
