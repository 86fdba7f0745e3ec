//! Host platform and display-session detection.

use crate::error::{Error, Result};

/// Operating system families with a known picker integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Linux, picked with `rofi` in dmenu mode.
    Linux,
    /// macOS, picked with `choose`.
    MacOs,
}

impl PlatformKind {
    /// Detect the platform the current process is running on.
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            other => Err(Error::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }
}

/// Whether the current session is running under Wayland.
///
/// Reads the live environment on every call; the answer must track session
/// changes rather than a value cached at startup.
pub fn is_wayland() -> bool {
    wayland_session(
        std::env::var("XDG_SESSION_TYPE").ok().as_deref(),
        std::env::var("WAYLAND_DISPLAY").ok().as_deref(),
    )
}

fn wayland_session(session_type: Option<&str>, wayland_display: Option<&str>) -> bool {
    session_type.is_some_and(|t| t.eq_ignore_ascii_case("wayland"))
        || wayland_display.is_some_and(|d| !d.is_empty())
}
