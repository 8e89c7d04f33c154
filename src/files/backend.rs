//! The seam between the picker façade and a dialog implementation
//!
//! The façade owns the host window lifecycle and result normalization;
//! a backend only knows how to create a host and show a dialog.

use crate::config::{FileFilter, PickerOptions};
use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// The three dialogs a picker can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    File,
    Files,
    Directory,
}

impl DialogKind {
    /// Title used when the caller does not provide one.
    pub fn default_title(&self) -> &'static str {
        match self {
            DialogKind::File => "Select File",
            DialogKind::Files => "Select Files",
            DialogKind::Directory => "Select Folder",
        }
    }

    /// Whether the dialog shows a file type dropdown.
    pub fn uses_filters(&self) -> bool {
        !matches!(self, DialogKind::Directory)
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogKind::File => write!(f, "open-file"),
            DialogKind::Files => write!(f, "open-files"),
            DialogKind::Directory => write!(f, "choose-directory"),
        }
    }
}

/// Validated, normalized form of `PickerOptions` handed to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub title: String,
    /// Empty for directory dialogs, never empty otherwise
    pub filters: Vec<FileFilter>,
    /// Only set when it names an existing directory
    pub initial_dir: Option<PathBuf>,
}

impl DialogRequest {
    /// Build a request for `kind` from caller options.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if a filter cannot be shown.
    pub fn new(kind: DialogKind, options: &PickerOptions) -> Result<Self> {
        let filters = if kind.uses_filters() {
            options.validate()?;
            options.effective_filters()
        } else {
            Vec::new()
        };

        Ok(Self {
            kind,
            title: options
                .title
                .clone()
                .unwrap_or_else(|| kind.default_title().to_string()),
            filters,
            initial_dir: options.resolved_initial_dir(),
        })
    }
}

/// A platform dialog subsystem.
///
/// `open_host` and `close_host` bracket every dialog call; the façade
/// guarantees `close_host` runs once for each successful `open_host`, on every
/// exit path. Dialog methods return `None`/empty on cancellation.
pub trait DialogBackend {
    /// The top-level window anchoring a dialog.
    type Host;

    /// Create the invisible, topmost host window.
    ///
    /// # Errors
    ///
    /// Returns `Error::DisplayUnavailable` when no windowing system is reachable.
    fn open_host(&self) -> Result<Self::Host>;

    /// Destroy the host window.
    fn close_host(&self, host: &mut Self::Host);

    fn open_file(&self, host: &Self::Host, request: &DialogRequest) -> Result<Option<PathBuf>>;

    /// Paths in the order the platform reports them.
    fn open_files(&self, host: &Self::Host, request: &DialogRequest) -> Result<Vec<PathBuf>>;

    fn choose_directory(
        &self,
        host: &Self::Host,
        request: &DialogRequest,
    ) -> Result<Option<PathBuf>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
