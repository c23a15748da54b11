//! Help text loading utilities
//!
//! Provides functions to load help text from files or fall back to the embedded text.

use super::HELP_TEXT;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for help file loading
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("unexpected file type for {}; a .txt file is expected", .0.display())]
    NotText(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load help text from a `.txt` file
///
/// # Errors
///
/// Returns `HelpError::NotText` if the path does not end in `.txt`, or
/// `HelpError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use pattern_guess::help::loader::load_from_file;
///
/// let text = load_from_file("data/help.txt").unwrap();
/// println!("{text}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<String, HelpError> {
    let path = path.as_ref();

    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if !is_text {
        return Err(HelpError::NotText(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| HelpError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load help text from `path` if given, otherwise use the embedded text
///
/// A file that cannot be loaded is logged and the embedded text is used instead.
#[must_use]
pub fn load_or_default(path: Option<&Path>) -> String {
    match path.map(load_from_file) {
        Some(Ok(text)) => text,
        Some(Err(e)) => {
            warn!("{e}; using built-in help");
            HELP_TEXT.to_string()
        }
        None => HELP_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pattern_guess_{}_{name}", std::process::id()))
    }

    #[test]
    fn rejects_non_text_extension() {
        let result = load_from_file("help.md");
        assert!(matches!(result, Err(HelpError::NotText(_))));

        let result = load_from_file("help");
        assert!(matches!(result, Err(HelpError::NotText(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file(temp_path("missing.txt"));
        assert!(matches!(result, Err(HelpError::Io { .. })));
    }

    #[test]
    fn reads_text_file_with_line_breaks() {
        let path = temp_path("help.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        let text = load_from_file(&path).unwrap();
        assert_eq!(text, "line one\nline two\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn falls_back_to_embedded() {
        assert_eq!(load_or_default(None), HELP_TEXT);
        assert_eq!(load_or_default(Some(Path::new("notes.pdf"))), HELP_TEXT);
    }
}
