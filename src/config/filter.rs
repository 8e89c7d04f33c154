//! File type filters for the dialog's filter dropdown
//!
//! A filter is a `(label, pattern)` pair such as `("Markdown Files", "*.md *.markdown")`.
//! Native dialogs only understand extension lists, so patterns are mapped
//! to extensions before they reach the backend.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Label of the default filter.
pub const ALL_FILES_LABEL: &str = "All files";

/// Pattern (and extension) matching every file.
pub const MATCH_ALL: &str = "*";

/// Characters that make an extension a glob rather than a literal.
const GLOB_CHARS: &[char] = &['*', '?', '[', ']', '{', '}'];

// ─────────────────────────────────────────────────────────────────────────────
// File Filter
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the dialog's file type dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileFilter {
    /// Text shown in the dropdown
    pub label: String,
    /// One or more whitespace-separated glob patterns
    pub pattern: String,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }

    /// The default filter: every file.
    pub fn all_files() -> Self {
        Self::new(ALL_FILES_LABEL, MATCH_ALL)
    }

    /// Iterate over the individual glob patterns.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.pattern.split_whitespace()
    }

    /// Map the patterns to the extension list a native dialog accepts.
    ///
    /// `*` and `*.*` become `*`, `*.md` becomes `md`, a literal file name such
    /// as `__init__.py` contributes its own extension, so the native dialog
    /// then lists every `.py` file rather than that one name. Duplicates are
    /// dropped, first appearance wins.
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = Vec::new();
        for pattern in self.patterns() {
            let ext = pattern_extension(pattern);
            if !extensions.iter().any(|e| e == ext) {
                extensions.push(ext.to_string());
            }
        }
        extensions
    }

    /// Reject filters a dialog cannot display.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if the label or the pattern is blank.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() || self.patterns().next().is_none() {
            return Err(Error::InvalidFilter {
                label: self.label.clone(),
                pattern: self.pattern.clone(),
            });
        }
        Ok(())
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::all_files()
    }
}

impl<L: Into<String>, P: Into<String>> From<(L, P)> for FileFilter {
    fn from((label, pattern): (L, P)) -> Self {
        Self::new(label, pattern)
    }
}

/// Extension a single glob pattern stands for.
fn pattern_extension(pattern: &str) -> &str {
    let name = pattern.rsplit(['/', '\\']).next().unwrap_or(pattern);
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains(GLOB_CHARS) => ext,
        _ => MATCH_ALL,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
