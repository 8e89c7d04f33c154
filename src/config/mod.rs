//! Configuration module for file-picker
//!
//! This module holds the per-call picker options and the file type
//! filters shown in the dialog's dropdown, with serde support so callers
//! can keep dialog presets in their own JSON settings.

mod filter;
mod options;

pub use filter::*;
pub use options::*;
