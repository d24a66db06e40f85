//! Editable snapshot of the extracted albums
//!
//! Album-level fields come from the first track's tag; every track then
//! contributes its title, in track order.

use crate::audio::read_tags;
use crate::core::Album;
use crate::error::Result;

use super::model::{EditSet, EditableAlbum};

/// Read one album's tags into an `EditableAlbum`
///
/// Any unreadable track fails the whole album.
pub fn materialize_album(album: &Album) -> Result<EditableAlbum> {
    log::info!("Parsing tags for album info: {}", album.original_name);

    let mut editable = EditableAlbum {
        source: Some(album.original_name.clone()),
        ..Default::default()
    };

    let Some(first) = album.tracks.first() else {
        log::warn!("Album {} has no tracks", album.original_name);
        return Ok(editable);
    };

    let album_tags = read_tags(first)?;
    editable.artist = album_tags.artist;
    editable.album_title = album_tags.album;
    editable.genre = album_tags.genre;
    editable.year = album_tags.year;

    for track in &album.tracks {
        log::debug!("Parsing tags for track info: {}", track.display());
        let tags = read_tags(track)?;
        editable.track_titles.push(tags.title);
    }

    Ok(editable)
}

/// Build the edit set for a batch of albums, in the same order
pub fn materialize(albums: &[Album]) -> Result<EditSet> {
    let albums = albums
        .iter()
        .map(materialize_album)
        .collect::<Result<Vec<_>>>()?;
    Ok(EditSet { albums })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use crate::test_fixtures::{create_test_album, write_silent_mp3_with_tags, track_tags};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn album_from(name: &str, tracks: Vec<PathBuf>) -> Album {
        Album {
            original_name: name.to_string(),
            working_dir: tracks[0].parent().unwrap().to_path_buf(),
            tracks,
        }
    }

    #[test]
    fn test_single_album_two_tracks() {
        let temp_dir = TempDir::new().unwrap();
        let tracks = create_test_album(temp_dir.path(), "Tycho", "Dive", &["A Walk", "Hours"]);
        let album = album_from("dive.zip", tracks);

        let set = materialize(&[album]).unwrap();

        assert_eq!(set.albums.len(), 1);
        let edit = &set.albums[0];
        assert_eq!(edit.source.as_deref(), Some("dive.zip"));
        assert_eq!(edit.artist, "Tycho");
        assert_eq!(edit.album_title, "Dive");
        assert_eq!(edit.genre, "Ambient");
        assert_eq!(edit.year, "2019");
        assert_eq!(edit.track_titles, vec!["A Walk", "Hours"]);
    }

    #[test]
    fn test_album_fields_come_from_first_track() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("01.mp3");
        let second = temp_dir.path().join("02.mp3");
        write_silent_mp3_with_tags(&first, &track_tags("Main Artist", "Main Album", "One"));
        write_silent_mp3_with_tags(&second, &track_tags("Guest", "Other Album", "Two"));

        let edit = materialize_album(&album_from("a.zip", vec![first, second])).unwrap();
        assert_eq!(edit.artist, "Main Artist");
        assert_eq!(edit.album_title, "Main Album");
        assert_eq!(edit.track_titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_result_aligned_with_input() {
        let temp_dir = TempDir::new().unwrap();
        let a = create_test_album(&temp_dir.path().join("a"), "A", "First", &["1", "2", "3"]);
        let b = create_test_album(&temp_dir.path().join("b"), "B", "Second", &["x"]);
        let albums = vec![album_from("a.zip", a), album_from("b.zip", b)];

        let set = materialize(&albums).unwrap();

        assert_eq!(set.albums.len(), albums.len());
        for (edit, album) in set.albums.iter().zip(&albums) {
            assert_eq!(edit.track_titles.len(), album.tracks.len());
            assert_eq!(edit.source.as_deref(), Some(album.original_name.as_str()));
        }
    }

    #[test]
    fn test_unreadable_track_fails_batch() {
        let temp_dir = TempDir::new().unwrap();
        let mut tracks = create_test_album(temp_dir.path(), "A", "B", &["ok"]);
        let broken = temp_dir.path().join("02 - broken.mp3");
        std::fs::write(&broken, b"not audio").unwrap();
        tracks.push(broken.clone());

        let result = materialize(&[album_from("a.zip", tracks)]);
        match result {
            Err(ImportError::TagRead { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected TagRead, got {:?}", other),
        }
    }
}
