use serde::{Deserialize, Serialize};

/// One album's human-editable metadata
///
/// `track_titles[j]` belongs to `Album::tracks[j]` of the album at the same
/// position; nothing else ties a title to its file. A field missing from
/// the document reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditableAlbum {
    /// Archive the album came from; checked against the album at this position when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub artist: String,
    #[serde(rename = "album")]
    pub album_title: String,
    pub genre: String,
    pub year: String,
    #[serde(rename = "tracks")]
    pub track_titles: Vec<String>,
}

/// The whole batch's editable metadata, one entry per imported album, in import order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditSet {
    pub albums: Vec<EditableAlbum>,
}
