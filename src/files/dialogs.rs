//! Native file dialog integration using the rfd crate
//!
//! This module provides the production `DialogBackend`: it connects to the
//! windowing system before any dialog is shown and builds rfd dialogs from
//! a `DialogRequest`. rfd reports a dialog that could not be shown the same
//! way as a cancelled one, so an unreachable display has to be caught first.

use super::backend::{DialogBackend, DialogRequest};
use crate::error::Result;
use log::debug;
use rfd::FileDialog;
use std::path::PathBuf;

#[cfg(all(unix, not(target_os = "macos")))]
use crate::error::Error;
#[cfg(all(unix, not(target_os = "macos")))]
use std::{
    env,
    ffi::OsString,
    io,
    net::{TcpStream, ToSocketAddrs},
    os::unix::net::UnixStream,
    path::Path,
    time::Duration,
};

/// Backend showing the platform's own dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBackend;

/// Host for a native dialog.
///
/// No window is created: rfd shows its dialogs application-modal without a
/// parent. The host stands for a display session that was reachable when the
/// call started and records which display that was.
#[derive(Debug)]
pub struct NativeHost {
    display: String,
    open: bool,
}

impl NativeHost {
    /// The display the dialog appears on, e.g. `x11::0` or `wayland:wayland-0`.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl DialogBackend for NativeBackend {
    type Host = NativeHost;

    fn open_host(&self) -> Result<NativeHost> {
        let display = probe_display()?;
        debug!("Native dialog host on display {}", display);
        Ok(NativeHost {
            display,
            open: true,
        })
    }

    fn close_host(&self, host: &mut NativeHost) {
        host.open = false;
        debug!("Native dialog host on display {} released", host.display);
    }

    fn open_file(&self, _host: &NativeHost, request: &DialogRequest) -> Result<Option<PathBuf>> {
        Ok(build_dialog(request).pick_file())
    }

    fn open_files(&self, _host: &NativeHost, request: &DialogRequest) -> Result<Vec<PathBuf>> {
        Ok(build_dialog(request).pick_files().unwrap_or_default())
    }

    fn choose_directory(
        &self,
        _host: &NativeHost,
        request: &DialogRequest,
    ) -> Result<Option<PathBuf>> {
        Ok(build_dialog(request).pick_folder())
    }
}

/// Build an rfd dialog with the request's title, filters and directory.
fn build_dialog(request: &DialogRequest) -> FileDialog {
    let mut dialog = FileDialog::new().set_title(request.title.as_str());

    for filter in &request.filters {
        let extensions = filter.extensions();
        dialog = dialog.add_filter(filter.label.as_str(), extensions.as_slice());
    }

    if let Some(dir) = &request.initial_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog
}

// ─────────────────────────────────────────────────────────────────────────────
// Display Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Directory holding the local X server sockets, named `X<display number>`.
#[cfg(all(unix, not(target_os = "macos")))]
const X11_SOCKET_DIR: &str = "/tmp/.X11-unix";

/// X server TCP port for display 0.
#[cfg(all(unix, not(target_os = "macos")))]
const X11_TCP_BASE_PORT: u16 = 6000;

#[cfg(all(unix, not(target_os = "macos")))]
const TCP_CONNECT_TIMEOUT: Duration = Duration::from_millis(500);

/// Connect to the windowing system a dialog will appear on.
///
/// # Errors
///
/// Returns `Error::DisplayUnavailable` on Linux/BSD when neither the Wayland
/// compositor nor the X server named by the environment accepts a connection.
#[cfg(all(unix, not(target_os = "macos")))]
fn probe_display() -> Result<String> {
    DisplayEnv::from_process().connect()
}

/// Windows and macOS always have a desktop session when a process can run.
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn probe_display() -> Result<String> {
    Ok("desktop".to_string())
}

/// Where the display servers of this session listen.
#[cfg(all(unix, not(target_os = "macos")))]
#[derive(Debug, Clone)]
struct DisplayEnv {
    wayland: Option<OsString>,
    x11: Option<OsString>,
    runtime_dir: Option<PathBuf>,
    x11_socket_dir: PathBuf,
}

#[cfg(all(unix, not(target_os = "macos")))]
impl DisplayEnv {
    fn from_process() -> Self {
        let var = |name: &str| env::var_os(name).filter(|value| !value.is_empty());
        Self {
            wayland: var("WAYLAND_DISPLAY"),
            x11: var("DISPLAY"),
            runtime_dir: var("XDG_RUNTIME_DIR").map(PathBuf::from),
            x11_socket_dir: PathBuf::from(X11_SOCKET_DIR),
        }
    }

    /// Open a connection to the compositor or X server, Wayland first.
    ///
    /// The connection is closed again right away; it only proves a server
    /// is listening. A set but unreachable display counts as unavailable.
    fn connect(&self) -> Result<String> {
        let mut failures = Vec::new();

        if let Some(name) = &self.wayland {
            let name = name.to_string_lossy();
            match self.connect_wayland(&name) {
                Ok(()) => return Ok(format!("wayland:{}", name)),
                Err(err) => {
                    debug!("Wayland display '{}' unreachable: {}", name, err);
                    failures.push(format!("Wayland display '{}': {}", name, err));
                }
            }
        }

        if let Some(name) = &self.x11 {
            let name = name.to_string_lossy();
            match self.connect_x11(&name) {
                Ok(()) => return Ok(format!("x11:{}", name)),
                Err(err) => {
                    debug!("X11 display '{}' unreachable: {}", name, err);
                    failures.push(format!("X11 display '{}': {}", name, err));
                }
            }
        }

        let reason = if failures.is_empty() {
            "neither WAYLAND_DISPLAY nor DISPLAY is set".to_string()
        } else {
            failures.join("; ")
        };
        Err(Error::DisplayUnavailable { reason })
    }

    fn connect_wayland(&self, name: &str) -> io::Result<()> {
        let socket = if Path::new(name).is_absolute() {
            PathBuf::from(name)
        } else {
            let dir = self.runtime_dir.as_ref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "XDG_RUNTIME_DIR is not set")
            })?;
            dir.join(name)
        };
        UnixStream::connect(socket).map(drop)
    }

    fn connect_x11(&self, display: &str) -> io::Result<()> {
        let (host, number) = parse_x11_display(display)?;

        if host.is_empty() || host == "unix" {
            return connect_x11_local(&self.x11_socket_dir, number);
        }

        let port = X11_TCP_BASE_PORT.checked_add(number).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "display number out of range")
        })?;
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "host did not resolve");
        for addr in (host, port).to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, TCP_CONNECT_TIMEOUT) {
                Ok(_) => return Ok(()),
                Err(err) => last_err = err,
            }
        }
        Err(last_err)
    }
}

/// Split `[host]:number[.screen]` into host and display number.
#[cfg(all(unix, not(target_os = "macos")))]
fn parse_x11_display(display: &str) -> io::Result<(&str, u16)> {
    let malformed = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("malformed display name '{}'", display),
        )
    };

    let (host, rest) = display.rsplit_once(':').ok_or_else(malformed)?;
    let number = rest
        .split('.')
        .next()
        .unwrap_or_default()
        .parse::<u16>()
        .map_err(|_| malformed())?;
    Ok((host, number))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn connect_x11_local(socket_dir: &Path, number: u16) -> io::Result<()> {
    let socket = socket_dir.join(format!("X{}", number));
    match UnixStream::connect(&socket) {
        Ok(_) => Ok(()),
        // Xorg on Linux also listens on the abstract twin of the socket path
        #[cfg(target_os = "linux")]
        Err(err) => connect_abstract(&socket).map_err(|_| err),
        #[cfg(not(target_os = "linux"))]
        Err(err) => Err(err),
    }
}

#[cfg(target_os = "linux")]
fn connect_abstract(socket: &Path) -> io::Result<()> {
    use std::os::linux::net::SocketAddrExt;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::net::SocketAddr;

    let addr = SocketAddr::from_abstract_name(socket.as_os_str().as_bytes())?;
    UnixStream::connect_addr(&addr).map(drop)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
