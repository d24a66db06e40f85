//! Editor session
//!
//! Writes the edit document into the work directory, hands the terminal to
//! the user's editor and blocks until it exits, then reads the document
//! back. The document is left on disk whatever happens, so a failed run
//! can be resumed from it.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::document::{read_document, write_document};
use super::model::EditSet;
use crate::core::EDIT_DOCUMENT_NAME;
use crate::error::{ImportError, Result};

/// Editor used when no preference is given
pub const DEFAULT_EDITOR: &str = "vim";

/// A resolved editor program plus any arguments from the preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Resolve the editor from a preference such as `EDITOR`
///
/// The preference may carry arguments (`code --wait`); the first word is
/// looked up on `PATH` unless it already contains a path separator.
pub fn resolve_editor(preference: Option<&str>) -> Result<EditorCommand> {
    let preference = preference
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_EDITOR);

    let mut words = shlex::split(preference)
        .filter(|w| !w.is_empty())
        .ok_or_else(|| ImportError::EditorNotFound {
            editor: preference.to_string(),
            reason: "could not parse editor command".to_string(),
        })?;
    let name = words.remove(0);

    let program = find_executable(&name).ok_or_else(|| ImportError::EditorNotFound {
        editor: name.clone(),
        reason: "not an executable file on PATH".to_string(),
    })?;

    Ok(EditorCommand {
        program,
        args: words,
    })
}

/// Locate an executable by name on `PATH`, or check it directly if it is a path
fn find_executable(name: &str) -> Option<PathBuf> {
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        let path = PathBuf::from(name);
        return is_executable(&path).then_some(path);
    }

    let search_path = std::env::var_os("PATH")?;
    std::env::split_paths(&search_path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run the editor on `document` in the foreground and wait for it
///
/// The editor inherits this process's terminal. A non-zero exit counts as
/// an aborted edit.
pub fn run_editor(editor: &EditorCommand, document: &Path) -> Result<()> {
    log::info!("Invoking editor: {}", editor.program.display());

    let status = Command::new(&editor.program)
        .args(&editor.args)
        .arg(document)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ImportError::EditorSpawn {
            editor: editor.program.clone(),
            source: e,
        })?;

    if !status.success() {
        return Err(ImportError::EditorExit {
            editor: editor.program.clone(),
            status: status.to_string(),
        });
    }

    Ok(())
}

/// Let the user edit `set` and return what they saved
///
/// The result replaces `set` wholesale; no diffing against the input.
pub fn review(set: &EditSet, scratch_dir: &Path, editor: &EditorCommand) -> Result<EditSet> {
    let document = scratch_dir.join(EDIT_DOCUMENT_NAME);

    log::info!("Writing edit document: {}", document.display());
    write_document(&document, set)?;

    run_editor(editor, &document)?;

    log::info!("Reading edit document: {}", document.display());
    read_document(&document)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::edit::EditableAlbum;
    use tempfile::TempDir;

    /// Editor command that runs `body` as a shell script with the document as `$1`
    fn script_editor(dir: &Path, body: &str) -> EditorCommand {
        let script = dir.join("editor.sh");
        std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        resolve_editor(Some(format!("sh {}", script.display()).as_str())).unwrap()
    }

    fn sample_set() -> EditSet {
        EditSet {
            albums: vec![EditableAlbum {
                source: Some("album.zip".to_string()),
                artist: "Artist".to_string(),
                album_title: "Old Title".to_string(),
                genre: "Rock".to_string(),
                year: "1990".to_string(),
                track_titles: vec!["One".to_string(), "Two".to_string()],
            }],
        }
    }

    #[test]
    fn test_resolve_default_editor_name() {
        match resolve_editor(None) {
            Ok(editor) => assert!(editor.program.ends_with(DEFAULT_EDITOR)),
            Err(ImportError::EditorNotFound { editor, .. }) => assert_eq!(editor, DEFAULT_EDITOR),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_editor_with_arguments() {
        let editor = resolve_editor(Some("sh -e")).unwrap();
        assert!(editor.program.ends_with("sh"));
        assert_eq!(editor.args, vec!["-e"]);
    }

    #[test]
    fn test_resolve_missing_editor() {
        let result = resolve_editor(Some("no-such-editor-on-this-machine"));
        assert!(matches!(result, Err(ImportError::EditorNotFound { .. })));
    }

    #[test]
    fn test_resolve_unbalanced_quotes() {
        let result = resolve_editor(Some("\"vim"));
        assert!(matches!(result, Err(ImportError::EditorNotFound { .. })));
    }

    #[test]
    fn test_review_unchanged_document() {
        let temp_dir = TempDir::new().unwrap();
        let editor = script_editor(temp_dir.path(), "exit 0");

        let result = review(&sample_set(), temp_dir.path(), &editor).unwrap();
        assert_eq!(result, sample_set());
    }

    #[test]
    fn test_review_returns_edited_document() {
        let temp_dir = TempDir::new().unwrap();
        let editor = script_editor(
            temp_dir.path(),
            "sed 's/Old Title/New Title/' \"$1\" > \"$1.tmp\" && mv \"$1.tmp\" \"$1\"",
        );

        let result = review(&sample_set(), temp_dir.path(), &editor).unwrap();
        assert_eq!(result.albums[0].album_title, "New Title");
        assert_eq!(result.albums[0].track_titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_review_editor_failure_keeps_document() {
        let temp_dir = TempDir::new().unwrap();
        let editor = script_editor(
            temp_dir.path(),
            "sed 's/Old Title/Half Done/' \"$1\" > \"$1.tmp\" && mv \"$1.tmp\" \"$1\"\nexit 1",
        );

        let result = review(&sample_set(), temp_dir.path(), &editor);
        assert!(matches!(result, Err(ImportError::EditorExit { .. })));

        let document = temp_dir.path().join(EDIT_DOCUMENT_NAME);
        let saved = read_document(&document).unwrap();
        assert_eq!(saved.albums[0].album_title, "Half Done");
    }

    #[test]
    fn test_review_malformed_edit() {
        let temp_dir = TempDir::new().unwrap();
        let editor = script_editor(temp_dir.path(), "echo 'tracks = [' >> \"$1\"");

        let result = review(&sample_set(), temp_dir.path(), &editor);
        assert!(matches!(result, Err(ImportError::DocumentParse { .. })));
    }
}
