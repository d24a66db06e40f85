//! Test fixtures for track and archive tests
//!
//! Generates tiny but valid MP3 files (a run of silent MPEG-1 Layer III
//! frames) and zip archives of them, so tag and import tests need no
//! external encoder.

#![cfg(test)]

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audio::tags::TrackTags;
use crate::audio::{write_tags, TagUpdate};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, no CRC, no padding
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
/// 144 * 128000 / 44100, rounded down
const FRAME_LEN: usize = 417;
const FRAME_COUNT: usize = 20;

/// Raw bytes of an untagged silent MP3
pub fn silent_mp3_bytes() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(FRAME_LEN * FRAME_COUNT);
    for _ in 0..FRAME_COUNT {
        bytes.extend_from_slice(&FRAME_HEADER);
        bytes.resize(bytes.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    bytes
}

/// Write an untagged silent MP3 at `path`
pub fn write_silent_mp3(path: &Path) {
    std::fs::write(path, silent_mp3_bytes()).expect("Failed to write fixture track");
}

/// Write a silent MP3 at `path` carrying the given tags
pub fn write_silent_mp3_with_tags(path: &Path, tags: &TrackTags) {
    write_silent_mp3(path);
    let update = TagUpdate {
        artist: tags.artist.clone(),
        album: tags.album.clone(),
        genre: tags.genre.clone(),
        year: tags.year.clone(),
        title: tags.title.clone(),
        ..Default::default()
    };
    write_tags(path, &update).expect("Failed to tag fixture track");
}

/// Tags for one track of a fixture album
pub fn track_tags(artist: &str, album: &str, title: &str) -> TrackTags {
    TrackTags {
        artist: artist.to_string(),
        album: album.to_string(),
        genre: "Ambient".to_string(),
        year: "2019".to_string(),
        title: title.to_string(),
    }
}

/// Create `dir/NN - <title>.mp3` for each title, tagged as one album
pub fn create_test_album(dir: &Path, artist: &str, album: &str, titles: &[&str]) -> Vec<PathBuf> {
    std::fs::create_dir_all(dir).expect("Failed to create album directory");
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let path = dir.join(format!("{:02} - {}.mp3", i + 1, title));
            write_silent_mp3_with_tags(&path, &track_tags(artist, album, title));
            path
        })
        .collect()
}

/// Zip the given files into `archive`, storing each under `entry_prefix/<file name>`
/// (or at the top level when `entry_prefix` is empty)
pub fn create_test_archive(archive: &Path, entry_prefix: &str, files: &[PathBuf]) {
    let file = std::fs::File::create(archive).expect("Failed to create archive");
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    if !entry_prefix.is_empty() {
        zip.add_directory(entry_prefix, options)
            .expect("Failed to add directory entry");
    }

    for path in files {
        let name = path.file_name().unwrap().to_string_lossy();
        let entry = if entry_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", entry_prefix, name)
        };
        zip.start_file(entry, options).expect("Failed to start entry");
        let bytes = std::fs::read(path).expect("Failed to read fixture file");
        zip.write_all(&bytes).expect("Failed to write entry");
    }

    zip.finish().expect("Failed to finish archive");
}
