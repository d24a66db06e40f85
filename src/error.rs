//! Error types for the album importer
//!
//! Every stage of the import returns `Result<T, ImportError>`. Nothing is
//! recovered per track or per album: the first error aborts the whole run,
//! and `main` maps it to a stage-specific exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Which side of the album/track correspondence broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The edit set and the album list have a different number of albums
    AlbumCount { edited: usize, extracted: usize },
    /// One album has a different number of titles than extracted tracks
    TrackCount {
        album: usize,
        edited: usize,
        extracted: usize,
    },
    /// An album record names a different source archive than the album at its position
    Source {
        album: usize,
        edited: String,
        extracted: String,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::AlbumCount { edited, extracted } => write!(
                f,
                "edit document has {} album(s) but {} were extracted",
                edited, extracted
            ),
            Mismatch::TrackCount {
                album,
                edited,
                extracted,
            } => write!(
                f,
                "album #{} has {} track title(s) but {} track file(s)",
                album + 1,
                edited,
                extracted
            ),
            Mismatch::Source {
                album,
                edited,
                extracted,
            } => write!(
                f,
                "album #{} is marked as source '{}' but the album at that position came from '{}'",
                album + 1,
                edited,
                extracted
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read tags from {path}: {reason}")]
    TagRead { path: PathBuf, reason: String },

    #[error("Failed to write tags to {path}: {reason}")]
    TagWrite { path: PathBuf, reason: String },

    #[error("Failed to parse edit document {path}: {reason}")]
    DocumentParse { path: PathBuf, reason: String },

    #[error("Failed to access edit document {path}: {source}")]
    DocumentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{editor}' not found: {reason}")]
    EditorNotFound { editor: String, reason: String },

    #[error("Failed to start editor {editor}: {source}")]
    EditorSpawn {
        editor: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor {editor} exited with {status}")]
    EditorExit { editor: PathBuf, status: String },

    #[error("Edit document no longer matches the imported albums: {0}")]
    CorrespondenceMismatch(Mismatch),

    #[error("Failed to extract {archive}: {reason}")]
    Extract { archive: PathBuf, reason: String },

    #[error("Archive {archive} contains no tracks")]
    NoTracks { archive: PathBuf },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Work directory {0} is in use by another import")]
    WorkDirLocked(PathBuf),

    #[error("File I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error, one per pipeline stage
    pub fn exit_code(&self) -> u8 {
        match self {
            ImportError::Io { .. } => 1,
            ImportError::Extract { .. } | ImportError::NoTracks { .. } => 2,
            ImportError::TagRead { .. } => 3,
            ImportError::EditorNotFound { .. }
            | ImportError::EditorSpawn { .. }
            | ImportError::EditorExit { .. } => 4,
            ImportError::DocumentParse { .. } | ImportError::DocumentIo { .. } => 5,
            ImportError::CorrespondenceMismatch(_) => 6,
            ImportError::TagWrite { .. } => 7,
            ImportError::Copy { .. } => 8,
            ImportError::WorkDirLocked(_) => 9,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
