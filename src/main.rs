//! album-import
//!
//! Batch-imports albums delivered as zip archives: extracts them, lets the
//! user fix the tags in their text editor, rewrites the tags and copies the
//! tracks into `root/Artist/Album/NN - Title.mp3`.

mod audio;
mod core;
mod edit;
mod error;
mod import;
mod logging;
mod test_fixtures;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::core::{default_work_dir, ImportConfig};

#[derive(Parser, Debug)]
#[command(name = "album-import", version, about)]
struct CliArgs {
    /// The root import directory, will be created if needed.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// The working directory, will be created if needed and deleted after a successful import.
    #[arg(long)]
    work: Option<PathBuf>,

    /// Editor command used to review the tags (defaults to vim).
    #[arg(long, env = "EDITOR")]
    editor: Option<String>,

    /// Apply an already-edited document instead of opening the editor.
    #[arg(long, value_name = "DOCUMENT")]
    resume_from: Option<PathBuf>,

    /// Show debug output in the terminal.
    #[arg(short, long)]
    verbose: bool,

    /// Zip archives to import, one album each.
    #[arg(required = true, value_name = "ARCHIVE")]
    archives: Vec<PathBuf>,
}

impl From<CliArgs> for ImportConfig {
    fn from(args: CliArgs) -> Self {
        ImportConfig {
            root: args.root,
            work_dir: args.work.unwrap_or_else(default_work_dir),
            editor: args.editor,
            resume_from: args.resume_from,
            archives: args.archives,
        }
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose);

    let config = ImportConfig::from(args);
    match import::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Import failed: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
