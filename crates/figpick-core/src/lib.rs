//! figpick core library
//!
//! Shared functionality for the figpick tools:
//! - Host platform and display-session detection
//! - Picker command construction and subprocess invocation
//! - Configuration resolution
//! - Common error types

pub mod config;
pub mod error;
pub mod picker;
pub mod platform;
pub mod tracing_init;

pub use config::Config;
pub use error::{Error, Result};
pub use picker::{PickKey, PickerOptions, Selection, build_picker_command, pick, pick_with_command};
pub use platform::{PlatformKind, is_wayland};
