//! file-picker - pick files or a directory through the native dialog
//!
//! Three blocking calls cover the common cases:
//!
//! ```no_run
//! use file_picker::{pick_dir, pick_file, pick_files, FileFilter};
//! use std::path::Path;
//!
//! let filters = [FileFilter::new("Markdown Files", "*.md *.markdown")];
//! if let Some(path) = pick_file(Some(&filters[..]), Some(Path::new("~/notes")))? {
//!     println!("Opening {}", path.display());
//! }
//! let sources = pick_files(None, None)?;
//! let workspace = pick_dir(None)?;
//! # Ok::<(), file_picker::Error>(())
//! ```
//!
//! Cancelling a dialog returns `None` (or an empty list). Without a windowing
//! system every call fails with `Error::DisplayUnavailable`.
//!
//! For titles, JSON presets or a custom backend, use `FilePicker` with
//! `PickerOptions` directly.

mod config;
mod error;
mod files;

pub use config::{FileFilter, PickerOptions, ALL_FILES_LABEL, MATCH_ALL};
pub use error::{Error, Result};
pub use files::{
    DialogBackend, DialogKind, DialogRequest, FilePicker, HostGuard, NativeBackend, NativeHost,
};

use std::path::{Path, PathBuf};

/// Let the user choose one file with the native dialog.
///
/// `file_type` defaults to a single "All files" filter and `init_dir` to the
/// platform's default directory. Returns `Ok(None)` if the user cancels.
///
/// Native dialogs filter by extension only: a literal pattern such as
/// `__init__.py` lists every `.py` file, not just files of that name.
pub fn pick_file(
    file_type: Option<&[FileFilter]>,
    init_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    FilePicker::native().pick_file(&options_for(file_type, init_dir))
}

/// Let the user choose any number of files with the native dialog.
///
/// Paths come back in the order the platform reports them; an empty list
/// means the user cancelled.
///
/// Native dialogs filter by extension only: a literal pattern such as
/// `__init__.py` lists every `.py` file, not just files of that name.
pub fn pick_files(
    file_type: Option<&[FileFilter]>,
    init_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    FilePicker::native().pick_files(&options_for(file_type, init_dir))
}

/// Let the user choose a directory with the native dialog.
///
/// Returns `Ok(None)` if the user cancels.
pub fn pick_dir(init_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    FilePicker::native().pick_dir(&options_for(None, init_dir))
}

fn options_for(file_type: Option<&[FileFilter]>, init_dir: Option<&Path>) -> PickerOptions {
    let mut options = PickerOptions::new();
    if let Some(filters) = file_type {
        options.filters = filters.to_vec();
    }
    options.initial_dir = init_dir.map(Path::to_path_buf);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_for_defaults() {
        let options = options_for(None, None);
        assert_eq!(options, PickerOptions::default());
    }

    #[test]
    fn test_options_for_overrides() {
        let filters = [FileFilter::new("init", "__init__.py")];
        let options = options_for(Some(&filters[..]), Some(Path::new("test")));
        assert_eq!(options.filters, filters.to_vec());
        assert_eq!(options.initial_dir, Some(PathBuf::from("test")));
        assert!(options.title.is_none());
    }
}
