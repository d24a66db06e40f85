//! Core types shared by the import stages
//!
//! This module contains:
//! - The extracted `Album` and track discovery
//! - Run settings (`ImportConfig`)

mod album;
mod config;

pub use album::Album;
pub use config::{default_work_dir, ImportConfig, EDIT_DOCUMENT_NAME};
