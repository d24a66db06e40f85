// Audio module - track detection and tag access

pub mod detection;
pub mod tags;

pub use detection::{is_track_file, TRACK_EXTENSION};
pub use tags::{read_tags, write_tags, TagUpdate};
