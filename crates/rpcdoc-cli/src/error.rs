//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from rpcdoc-core library
    #[error("Core error: {0}")]
    Core(#[from] rpcdoc_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Method not present in the definitions
    #[error("Method '{}' not found{}", name, service.as_ref().map(|s| format!(" in service '{}'", s)).unwrap_or_default())]
    MethodNotFound { name: String, service: Option<String> },

    /// Two methods of one service map to the same page file
    #[error("Method '{method}' maps to {file_name}, which another method of this service already uses")]
    DuplicateFileName { method: String, file_name: String },

    /// One or more methods could not be generated
    #[error("{failed} of {total} method(s) failed to generate")]
    GenerationFailed { failed: usize, total: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::MethodNotFound { .. } => 7,
            Self::GenerationFailed { .. } => 8,
            Self::DuplicateFileName { .. } => 9,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }
}

impl From<rpcdoc_core::ConstructionError> for Error {
    fn from(err: rpcdoc_core::ConstructionError) -> Self {
        Self::Core(err.into())
    }
}

impl From<rpcdoc_core::ExportError> for Error {
    fn from(err: rpcdoc_core::ExportError) -> Self {
        Self::Core(err.into())
    }
}

/// An error's message followed by its causes, skipping causes the message
/// already ends with
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut current = error.source();

    while let Some(source) = current {
        let cause = source.to_string();
        if !message.ends_with(&cause) {
            message.push_str(": ");
            message.push_str(&cause);
        }
        current = source.source();
    }

    message
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error_chain(error))
    } else {
        format!("Error: {}", error_chain(error))
    }
}
