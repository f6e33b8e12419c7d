//! Error types
//!
//! `Display` of every variant is the exact text shown in the page's error region.

use thiserror::Error;

/// Message shown when the backend reports failure without a reason
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong while fetching recommendations";

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required form field was empty. No request is made.
    #[error("All fields are required")]
    Validation,

    /// The backend answered with `success: false`
    #[error("{0}")]
    Application(String),

    /// The request did not complete or the body could not be read
    #[error("Could not connect to the server: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Server failure with an optional server-provided message
    pub fn application(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.is_empty() => Error::Application(m),
            _ => Error::Application(FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }

    /// Any failure before a parsed envelope was obtained
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Error::Transport(cause.to_string())
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
