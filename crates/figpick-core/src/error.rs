//! Error types for the figpick core library.

use thiserror::Error;

/// Result type alias using figpick Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for figpick operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No picker integration exists for the host platform.
    #[error("no supported picker for {os}")]
    UnsupportedPlatform {
        /// OS name as reported by `std::env::consts::OS`.
        os: String,
    },

    /// A picker invocation was attempted with an empty argument vector.
    #[error("picker command is empty")]
    EmptyCommand,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (includes selector launch failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
