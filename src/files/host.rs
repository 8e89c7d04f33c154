//! Scoped host window
//!
//! `HostGuard` owns the host window for the duration of one dialog call and
//! destroys it on drop, so the window is released on success, cancellation,
//! error and unwinding alike.

use super::backend::DialogBackend;
use crate::error::Result;
use log::debug;

pub struct HostGuard<'a, B: DialogBackend> {
    backend: &'a B,
    host: B::Host,
}

impl<'a, B: DialogBackend> HostGuard<'a, B> {
    /// Create the host window.
    ///
    /// # Errors
    ///
    /// Propagates the backend's `open_host` error; nothing is left to clean up.
    pub fn acquire(backend: &'a B) -> Result<Self> {
        let host = backend.open_host()?;
        debug!("Host window created");
        Ok(Self { backend, host })
    }

    pub fn host(&self) -> &B::Host {
        &self.host
    }
}

impl<B: DialogBackend> Drop for HostGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.close_host(&mut self.host);
        debug!("Host window destroyed");
    }
}
