//! Archive extraction
//!
//! Each archive is unpacked into its own `work/NN-<archive file name>/`,
//! numbered by position, and its tracks collected in path order. The
//! number keeps two archives with the same file name apart.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::core::Album;
use crate::error::{ImportError, Result};

/// Directory the archive at `index` is unpacked into
pub fn album_work_dir(work: &Path, index: usize, archive_name: &str) -> PathBuf {
    work.join(format!("{:02}-{}", index + 1, archive_name))
}

/// Unpack the archive at position `index` into the work directory and list its tracks
pub fn extract_album(work: &Path, index: usize, archive: &Path) -> Result<Album> {
    let extract_error = |reason: String| ImportError::Extract {
        archive: archive.to_path_buf(),
        reason,
    };

    let base = archive
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| extract_error("Archive path has no file name".to_string()))?;
    let dest = album_work_dir(work, index, &base);

    log::info!("Extracting {} into {}", archive.display(), dest.display());

    // Start from an empty directory so a re-run sees exactly the archive's tracks
    if dest.exists() {
        fs::remove_dir_all(&dest).map_err(|e| ImportError::io(&dest, e))?;
    }
    fs::create_dir_all(&dest).map_err(|e| ImportError::io(&dest, e))?;

    let file = File::open(archive).map_err(|e| extract_error(format!("Failed to open: {}", e)))?;
    let mut zip = zip::ZipArchive::new(file).map_err(|e| extract_error(e.to_string()))?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| extract_error(e.to_string()))?;

        let Some(relative) = entry.enclosed_name() else {
            log::warn!("Skipping unsafe entry in {}: {}", base, entry.name());
            continue;
        };
        let output_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| ImportError::io(&output_path, e))?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
        }
        log::debug!("Extracting {}", output_path.display());
        let mut output = File::create(&output_path).map_err(|e| ImportError::io(&output_path, e))?;
        io::copy(&mut entry, &mut output)
            .map_err(|e| extract_error(format!("Failed to unpack {}: {}", entry.name(), e)))?;
    }

    let album = Album::from_dir(base, &dest);
    if album.tracks.is_empty() {
        return Err(ImportError::NoTracks {
            archive: archive.to_path_buf(),
        });
    }

    log::info!(
        "Found {} track(s) from {} in {}",
        album.tracks.len(),
        album.original_name,
        album.working_dir.display()
    );
    Ok(album)
}

/// Extract every archive, in the order given
pub fn extract_albums(work: &Path, archives: &[PathBuf]) -> Result<Vec<Album>> {
    archives
        .iter()
        .enumerate()
        .map(|(index, archive)| extract_album(work, index, archive))
        .collect()
}
