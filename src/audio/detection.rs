use std::path::Path;

/// Extension of the only track container the importer handles
pub const TRACK_EXTENSION: &str = "mp3";

/// Check if a file is an importable track based on its extension
pub fn is_track_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(TRACK_EXTENSION))
        .unwrap_or(false)
}
