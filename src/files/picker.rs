//! The file selection façade
//!
//! Every call walks the same path: create the host window, show one dialog,
//! turn the answer into paths, destroy the host window. Cancelling yields
//! `None` or an empty list, never an empty path.

use super::backend::{DialogBackend, DialogKind, DialogRequest};
use super::dialogs::NativeBackend;
use super::host::HostGuard;
use crate::config::PickerOptions;
use crate::error::Result;
use log::{debug, info};
use std::path::PathBuf;

/// Shows native dialogs through a `DialogBackend`.
#[derive(Debug, Default, Clone)]
pub struct FilePicker<B: DialogBackend = NativeBackend> {
    backend: B,
}

impl FilePicker<NativeBackend> {
    /// A picker using the platform's native dialogs.
    pub fn native() -> Self {
        Self::new(NativeBackend)
    }
}

impl<B: DialogBackend> FilePicker<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Let the user choose one file.
    ///
    /// Returns `Ok(None)` if the dialog was cancelled.
    ///
    /// # Errors
    ///
    /// `Error::InvalidFilter` for unusable filters (no window is created),
    /// `Error::DisplayUnavailable` without a windowing system, or whatever
    /// the backend reports while the dialog is shown.
    pub fn pick_file(&self, options: &PickerOptions) -> Result<Option<PathBuf>> {
        let request = DialogRequest::new(DialogKind::File, options)?;
        let picked = self.with_host(&request, |backend, host| backend.open_file(host, &request))?;
        Ok(log_single(&request, non_empty(picked)))
    }

    /// Let the user choose any number of files.
    ///
    /// Paths keep the order the platform reports. An empty list means the
    /// dialog was cancelled.
    pub fn pick_files(&self, options: &PickerOptions) -> Result<Vec<PathBuf>> {
        let request = DialogRequest::new(DialogKind::Files, options)?;
        let picked = self.with_host(&request, |backend, host| backend.open_files(host, &request))?;

        let paths: Vec<PathBuf> = picked
            .into_iter()
            .filter(|path| !path.as_os_str().is_empty())
            .collect();

        if paths.is_empty() {
            info!("{} dialog cancelled", request.kind);
        } else {
            info!("{} dialog selected {} file(s)", request.kind, paths.len());
        }
        Ok(paths)
    }

    /// Let the user choose one directory.
    ///
    /// Returns `Ok(None)` if the dialog was cancelled.
    pub fn pick_dir(&self, options: &PickerOptions) -> Result<Option<PathBuf>> {
        let request = DialogRequest::new(DialogKind::Directory, options)?;
        let picked = self.with_host(&request, |backend, host| {
            backend.choose_directory(host, &request)
        })?;
        Ok(log_single(&request, non_empty(picked)))
    }

    /// Run `show` with a host window that is destroyed on every exit path.
    fn with_host<R>(
        &self,
        request: &DialogRequest,
        show: impl FnOnce(&B, &B::Host) -> Result<R>,
    ) -> Result<R> {
        let guard = HostGuard::acquire(&self.backend)?;
        debug!("Showing {} dialog '{}'", request.kind, request.title);
        show(&self.backend, guard.host())
    }
}

/// Some toolkits report cancellation as an empty string.
fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

fn log_single(request: &DialogRequest, picked: Option<PathBuf>) -> Option<PathBuf> {
    match &picked {
        Some(path) => info!("{} dialog selected {}", request.kind, path.display()),
        None => info!("{} dialog cancelled", request.kind),
    }
    picked
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
