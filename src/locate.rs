//! Default-document search for the current directory.
//!
//! When the caller gives no input path, the tool picks a document from the
//! working directory instead. The extension and name filter are parameters so
//! the search stays a general mechanism rather than a baked-in shortcut.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Options for the default-document search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// File extension candidates must carry (compared case-insensitively,
    /// without the leading dot).
    pub extension: String,
    /// Case-insensitive substring the file name must contain, if set.
    pub name_contains: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            extension: "docx".to_string(),
            name_contains: None,
        }
    }
}

impl SearchOptions {
    /// Create options with the default extension and no name filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension candidates must carry.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Require the file name to contain the given substring
    /// (case-insensitive).
    pub fn with_name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    fn matches(&self, path: &Path) -> bool {
        let ext_matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false);
        if !ext_matches {
            return false;
        }

        match self.name_contains {
            Some(ref needle) => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            None => true,
        }
    }
}

/// Find the default document in a directory.
///
/// Returns the first regular file (in file-name order, so the choice is
/// stable across platforms) whose name matches the options, or `None` when
/// nothing matches.
pub fn find_default_document(dir: &Path, options: &SearchOptions) -> io::Result<Option<PathBuf>> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && options.matches(&path) {
            candidates.push(path);
        }
    }

    candidates.sort();
    Ok(candidates.into_iter().next())
}
