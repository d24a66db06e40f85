//! Import collaborators around the edit pipeline
//!
//! Archive extraction, the library copy, the work directory lock and the
//! workflow that strings them together.

mod extract;
mod library;
mod lock;
mod workflow;

pub use workflow::run;
