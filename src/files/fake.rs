//! Scripted dialog backend for tests
//!
//! Records every request, counts live host windows and answers each dialog
//! with a fixed response instead of asking a user.

use super::backend::{DialogBackend, DialogRequest};
use crate::error::{Error, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// What the fake "user" does when a dialog is shown.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// Select these paths (single dialogs take the first one)
    Select(Vec<PathBuf>),
    /// Close the dialog without choosing anything
    Cancel,
    /// Report an empty string, as some toolkits do on cancel
    EmptyString,
    /// Fail while the dialog is shown
    Fail(String),
    /// Panic while the dialog is shown
    Panic,
}

#[derive(Debug)]
pub struct FakeHost {
    open: bool,
}

impl FakeHost {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

pub struct FakeBackend {
    response: FakeResponse,
    has_display: bool,
    live_hosts: Cell<usize>,
    hosts_opened: Cell<usize>,
    requests: RefCell<Vec<DialogRequest>>,
}

impl FakeBackend {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            has_display: true,
            live_hosts: Cell::new(0),
            hosts_opened: Cell::new(0),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn selecting(path: impl Into<PathBuf>) -> Self {
        Self::new(FakeResponse::Select(vec![path.into()]))
    }

    /// A backend with no windowing system.
    pub fn headless() -> Self {
        Self {
            has_display: false,
            ..Self::new(FakeResponse::Cancel)
        }
    }

    pub fn live_hosts(&self) -> usize {
        self.live_hosts.get()
    }

    pub fn hosts_opened(&self) -> usize {
        self.hosts_opened.get()
    }

    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests.borrow().clone()
    }

    fn respond(&self, host: &FakeHost, request: &DialogRequest) -> Result<Vec<PathBuf>> {
        assert!(host.is_open(), "dialog shown on a destroyed host window");
        self.requests.borrow_mut().push(request.clone());

        match &self.response {
            FakeResponse::Select(paths) => Ok(paths.clone()),
            FakeResponse::Cancel => Ok(Vec::new()),
            FakeResponse::EmptyString => Ok(vec![PathBuf::new()]),
            FakeResponse::Fail(msg) => Err(Error::Dialog(msg.clone())),
            FakeResponse::Panic => panic!("fake dialog crashed"),
        }
    }
}

impl DialogBackend for FakeBackend {
    type Host = FakeHost;

    fn open_host(&self) -> Result<FakeHost> {
        if !self.has_display {
            return Err(Error::DisplayUnavailable {
                reason: "fake backend has no display".to_string(),
            });
        }
        self.live_hosts.set(self.live_hosts.get() + 1);
        self.hosts_opened.set(self.hosts_opened.get() + 1);
        Ok(FakeHost { open: true })
    }

    fn close_host(&self, host: &mut FakeHost) {
        assert!(host.open, "host window destroyed twice");
        host.open = false;
        self.live_hosts.set(self.live_hosts.get() - 1);
    }

    fn open_file(&self, host: &FakeHost, request: &DialogRequest) -> Result<Option<PathBuf>> {
        Ok(self.respond(host, request)?.into_iter().next())
    }

    fn open_files(&self, host: &FakeHost, request: &DialogRequest) -> Result<Vec<PathBuf>> {
        self.respond(host, request)
    }

    fn choose_directory(
        &self,
        host: &FakeHost,
        request: &DialogRequest,
    ) -> Result<Option<PathBuf>> {
        Ok(self.respond(host, request)?.into_iter().next())
    }
}
