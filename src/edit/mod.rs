//! Metadata edit pipeline
//!
//! materialize -> encode -> editor session -> decode -> apply
//!
//! Everything is matched by position: the edit set's albums line up with
//! the extracted album list, and each album's titles with its track files.

mod apply;
mod document;
mod materialize;
mod model;
mod session;

pub use apply::{apply, check_correspondence};
pub use document::read_document;
pub use materialize::materialize;
pub use model::{EditSet, EditableAlbum};
pub use session::{resolve_editor, review};
