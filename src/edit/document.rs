//! Edit document encoding
//!
//! The edit set is written as TOML: one `[[albums]]` table per album with
//! `artist`, `album`, `genre`, `year` and a `tracks` list. A list of two or
//! more titles is written one title per line; a single title stays inline
//! on the `tracks` line. A missing field decodes as empty. Values use ordinary TOML string escaping, so quotes, backslashes
//! and line breaks in tag values survive the round trip. Decoding checks
//! syntax and shape only; what the human typed into a value is kept as is.

use std::fs;
use std::path::Path;

use super::model::EditSet;
use crate::error::{ImportError, Result};

/// Serialize an edit set to document text
pub fn encode(set: &EditSet) -> std::result::Result<String, toml::ser::Error> {
    toml::to_string_pretty(set)
}

/// Parse (possibly hand-edited) document text back into an edit set
pub fn decode(text: &str) -> std::result::Result<EditSet, toml::de::Error> {
    toml::from_str(text)
}

/// Write an edit set to a document file
pub fn write_document(path: &Path, set: &EditSet) -> Result<()> {
    let text = encode(set).map_err(|e| ImportError::DocumentIo {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;

    fs::write(path, text).map_err(|e| ImportError::DocumentIo {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load an edit set from a document file
pub fn read_document(path: &Path) -> Result<EditSet> {
    let text = fs::read_to_string(path).map_err(|e| ImportError::DocumentIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    decode(&text).map_err(|e| ImportError::DocumentParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditableAlbum;
    use tempfile::TempDir;

    fn album(artist: &str, title: &str, tracks: &[&str]) -> EditableAlbum {
        EditableAlbum {
            source: Some(format!("{}.zip", title)),
            artist: artist.to_string(),
            album_title: title.to_string(),
            genre: "Electronic".to_string(),
            year: "2001".to_string(),
            track_titles: tracks.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_round_trip() {
        let set = EditSet {
            albums: vec![
                album("Daft Punk", "Discovery", &["One More Time", "Aerodynamic"]),
                album("Air", "Moon Safari", &["La femme d'argent"]),
            ],
        };

        let decoded = decode(&encode(&set).unwrap()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_round_trip_preserves_empty_values() {
        let set = EditSet {
            albums: vec![EditableAlbum {
                source: None,
                artist: String::new(),
                album_title: String::new(),
                genre: String::new(),
                year: String::new(),
                track_titles: vec![String::new(), "b".to_string()],
            }],
        };

        let decoded = decode(&encode(&set).unwrap()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_round_trip_empty_set() {
        let set = EditSet::default();
        assert_eq!(decode(&encode(&set).unwrap()).unwrap(), set);
    }

    #[test]
    fn test_round_trip_escapes_special_characters() {
        let set = EditSet {
            albums: vec![album(
                "Guns N' Roses",
                "\"Quoted\" \\ Back\\slash",
                &[
                    "Line\nBreak",
                    "Tab\there",
                    "'''triple'''",
                    "\"\"\"",
                    "# not a comment",
                    "[not a table]",
                    "Sigur Rós – Ágætis byrjun",
                ],
            )],
        };

        let decoded = decode(&encode(&set).unwrap()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_tracks_written_one_per_line() {
        let set = EditSet {
            albums: vec![album("A", "B", &["First", "Second"])],
        };
        let text = encode(&set).unwrap();
        let first = text.lines().filter(|l| l.contains("\"First\"")).count();
        let second = text.lines().filter(|l| l.contains("\"Second\"")).count();
        assert_eq!(first, 1);
        assert_eq!(second, 1);
        assert!(!text.lines().any(|l| l.contains("First") && l.contains("Second")));
    }

    #[test]
    fn test_decode_hand_written_document() {
        let text = r#"
[[albums]]
artist = "Nils Frahm"
album = "Spaces"
genre = "Piano"
year = "twenty thirteen"
tracks = [
    "An Aborted Beginning",
    "Says",
]
"#;
        let set = decode(text).unwrap();
        assert_eq!(set.albums.len(), 1);
        assert_eq!(set.albums[0].source, None);
        assert_eq!(set.albums[0].year, "twenty thirteen");
        assert_eq!(set.albums[0].track_titles, vec!["An Aborted Beginning", "Says"]);
    }

    #[test]
    fn test_decode_malformed_syntax() {
        assert!(decode("[[albums]]\nartist = \"unterminated\n").is_err());
    }

    #[test]
    fn test_decode_missing_field() {
        let text = "[[albums]]\nartist = \"A\"\nalbum = \"B\"\nyear = \"1999\"\ntracks = [\"One\"]\n";
        let set = decode(text).unwrap();
        assert_eq!(set.albums[0].genre, "");
        assert_eq!(set.albums[0].year, "1999");
        assert_eq!(set.albums[0].track_titles, vec!["One"]);
    }

    #[test]
    fn test_decode_missing_tracks_is_empty_list() {
        let text = "[[albums]]\nartist = \"A\"\nalbum = \"B\"\ngenre = \"C\"\nyear = \"1\"\n";
        let set = decode(text).unwrap();
        assert!(set.albums[0].track_titles.is_empty());
    }

    #[test]
    fn test_decode_rejects_misspelled_field() {
        let text = "[[albums]]\nartist = \"A\"\nalbum = \"B\"\ngenre = \"C\"\nyear = \"1\"\ntracks = []\nartsit = \"A\"\n";
        assert!(decode(text).is_err());
    }

    #[test]
    fn test_write_and_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edit.toml");
        let set = EditSet {
            albums: vec![album("A", "B", &["one"])],
        };

        write_document(&path, &set).unwrap();
        assert_eq!(read_document(&path).unwrap(), set);
    }

    #[test]
    fn test_read_document_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edit.toml");
        fs::write(&path, "albums = [[[").unwrap();

        let result = read_document(&path);
        assert!(matches!(result, Err(ImportError::DocumentParse { .. })));
    }

    #[test]
    fn test_read_document_missing_file() {
        let result = read_document(Path::new("/nonexistent/edit.toml"));
        assert!(matches!(result, Err(ImportError::DocumentIo { .. })));
    }
}
