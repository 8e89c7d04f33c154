//! File selection module for file-picker
//!
//! This module provides the picker façade, the backend seam it talks to,
//! the scoped host window guard and the native dialog backend built on rfd.

pub mod backend;
pub mod dialogs;
pub mod host;
pub mod picker;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{DialogBackend, DialogKind, DialogRequest};
pub use dialogs::{NativeBackend, NativeHost};
pub use host::HostGuard;
pub use picker::FilePicker;
