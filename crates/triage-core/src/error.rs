//! Error types for the triage dashboard

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the dashboard pipeline.
///
/// No local recovery happens anywhere in the fetch-and-present path; every
/// variant propagates to the top of the render and fails it as a whole.
#[derive(Error, Debug)]
pub enum Error {
    /// Backend returned a non-success HTTP status
    #[error("Request failed: {status} {path}")]
    Request {
        /// HTTP status code returned by the backend
        status: u16,
        /// Requested path, relative to the base URL
        path: String,
    },

    /// Backend response body could not be decoded as the expected JSON shape
    #[error("Failed to decode response from {path}: {message}")]
    Decode {
        /// Requested path, relative to the base URL
        path: String,
        /// Decoder error message
        message: String,
    },

    /// Transport-level failure talking to the backend
    #[error("Backend unreachable at {path}: {message}")]
    Backend {
        /// Requested path, relative to the base URL
        path: String,
        /// Transport error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Template rendering failure
    #[error("Render error: {message}")]
    Render {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a request error from a status code and path
    pub fn request(status: u16, path: impl Into<String>) -> Self {
        Self::Request {
            status,
            path: path.into(),
        }
    }

    /// Create a decode error
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a backend transport error
    pub fn backend(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures caused by the upstream triage API rather than
    /// this process (used to pick the HTTP status of the error page).
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Request { .. } | Self::Decode { .. } | Self::Backend { .. }
        )
    }
}
