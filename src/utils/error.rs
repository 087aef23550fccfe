//! Error handling for Gridson exports
//!
//! This module provides a unified error type and result type for the
//! fallible plumbing (HTTP fetch, file I/O, CLI input parsing). The
//! transformation engine itself never fails; structural problems degrade
//! into diagnostics instead.

use std::fmt;

/// Export error type
#[derive(Debug, Clone)]
pub enum ExportError {
    /// Invalid input
    InvalidInput { message: String },
    /// HTTP transport error (connection, TLS, timeout)
    HttpError { message: String },
    /// Spreadsheet backend rejected the request
    ApiError { status: u16, message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ExportError::HttpError { message } => {
                write!(f, "HTTP error: {}", message)
            }
            ExportError::ApiError { status, message } => {
                write!(f, "API error (HTTP {}): {}", status, message)
            }
            ExportError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ExportError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::InvalidInput {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::HttpError {
            message: err.to_string(),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

// Convenience constructors for errors
impl ExportError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ExportError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        ExportError::HttpError {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ExportError::ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        ExportError::IoError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ExportError::InternalError {
            message: message.into(),
        }
    }
}
