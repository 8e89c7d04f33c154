//! Per-call picker options
//!
//! `PickerOptions` is built fresh for every dialog. Nothing is shared between
//! calls, so a caller mutating one set of options never affects another.

use super::FileFilter;
use crate::error::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Home directory shorthand accepted at the start of an initial directory.
const HOME_PREFIX: &str = "~";

/// Options for a single picker call.
///
/// All fields have defaults via `#[serde(default)]`, so a preset stored as
/// `{"title": "Open Notes"}` deserializes with the "All files" filter and the
/// platform's default directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Entries of the file type dropdown, in display order
    pub filters: Vec<FileFilter>,

    /// Directory the dialog opens in (None = platform default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_dir: Option<PathBuf>,

    /// Dialog title (None = a title matching the dialog kind)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            filters: vec![FileFilter::all_files()],
            initial_dir: None,
            title: None,
        }
    }
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filter list.
    pub fn with_filters<I, F>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FileFilter>,
    {
        self.filters = filters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_initial_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.initial_dir = Some(dir.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parse options from a JSON preset.
    ///
    /// # Errors
    ///
    /// Returns `Error::OptionsParse` if the JSON is malformed and
    /// `Error::InvalidFilter` if a filter has a blank label or pattern.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check every filter.
    pub fn validate(&self) -> Result<()> {
        self.filters.iter().try_for_each(FileFilter::validate)
    }

    /// The filters to show, falling back to "All files" when none are set.
    pub fn effective_filters(&self) -> Vec<FileFilter> {
        if self.filters.is_empty() {
            vec![FileFilter::all_files()]
        } else {
            self.filters.clone()
        }
    }

    /// The initial directory to hand to the dialog.
    ///
    /// A leading `~` is expanded to the home directory. A directory that does
    /// not exist is ignored so the platform default applies instead.
    pub fn resolved_initial_dir(&self) -> Option<PathBuf> {
        let requested = self.initial_dir.as_deref()?;
        let dir = expand_home(requested);

        if dir.is_dir() {
            debug!("Dialog initial directory: {}", dir.display());
            Some(dir)
        } else {
            warn!(
                "Initial directory '{}' is not a directory, using platform default",
                dir.display()
            );
            None
        }
    }
}

/// Expand a leading `~` component to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix(HOME_PREFIX) else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => {
            warn!("Home directory not found, keeping '{}'", path.display());
            path.to_path_buf()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.filters, vec![FileFilter::all_files()]);
        assert!(options.initial_dir.is_none());
        assert!(options.title.is_none());
    }

    #[test]
    fn test_defaults_are_not_shared() {
        let mut first = PickerOptions::new();
        first.filters.push(FileFilter::new("Markdown", "*.md"));

        let second = PickerOptions::new();
        assert_eq!(second.filters.len(), 1);
    }

    #[test]
    fn test_builder() {
        let options = PickerOptions::new()
            .with_filters([("init", "__init__.py"), ("Python", "*.py")])
            .with_initial_dir("test")
            .with_title("Pick a module");

        assert_eq!(options.filters.len(), 2);
        assert_eq!(options.filters[0].label, "init");
        assert_eq!(options.initial_dir, Some(PathBuf::from("test")));
        assert_eq!(options.title.as_deref(), Some("Pick a module"));
    }

    #[test]
    fn test_effective_filters_fall_back_to_all_files() {
        let options = PickerOptions::new().with_filters(Vec::<FileFilter>::new());
        assert_eq!(options.effective_filters(), vec![FileFilter::all_files()]);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = PickerOptions::from_json(r#"{"title": "Open Notes"}"#).unwrap();
        assert_eq!(options.title.as_deref(), Some("Open Notes"));
        assert_eq!(options.filters, vec![FileFilter::all_files()]);
        assert!(options.initial_dir.is_none());
    }

    #[test]
    fn test_from_json_rejects_blank_filter() {
        let result = PickerOptions::from_json(r#"{"filters": [{"label": "", "pattern": "*"}]}"#);
        assert!(matches!(result, Err(Error::InvalidFilter { .. })));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = PickerOptions::from_json("{ not json");
        assert!(matches!(result, Err(Error::OptionsParse { .. })));
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&PickerOptions::default()).unwrap();
        assert!(!json.contains("initial_dir"));
        assert!(!json.contains("title"));

        let roundtrip: PickerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, PickerOptions::default());
    }

    #[test]
    fn test_resolved_initial_dir_existing() {
        let temp = tempfile::tempdir().unwrap();
        let options = PickerOptions::new().with_initial_dir(temp.path());
        assert_eq!(options.resolved_initial_dir(), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_resolved_initial_dir_missing_is_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let options = PickerOptions::new().with_initial_dir(temp.path().join("missing"));
        assert_eq!(options.resolved_initial_dir(), None);
    }

    #[test]
    fn test_resolved_initial_dir_file_is_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("notes.md");
        std::fs::write(&file, "# notes").unwrap();

        let options = PickerOptions::new().with_initial_dir(&file);
        assert_eq!(options.resolved_initial_dir(), None);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/tmp")), PathBuf::from("/tmp"));
        assert_eq!(expand_home(Path::new("~user")), PathBuf::from("~user"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~")), home);
            assert_eq!(expand_home(Path::new("~/docs")), home.join("docs"));
        }
    }
}
