//! Error types for the rpcdoc core library
//!
//! Construction and export failures are kept as separate types so a caller
//! processing many methods can tell an invalid definition apart from a
//! failed render, and keep going with the rest.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rpcdoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// A method definition could not be turned into a record
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Rendering a method page failed
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid input found while building a [`crate::MethodRecord`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The definition's name is empty or whitespace only
    #[error("method name must not be empty")]
    EmptyName,
}

/// A failure reported by the rendering collaborator, wrapped with the
/// method and destination it was rendering.
#[derive(Error, Debug)]
#[error("Export of method '{method}' to {} failed", path.display())]
pub struct ExportError {
    pub method: String,
    pub path: PathBuf,
    #[source]
    pub source: anyhow::Error,
}

impl ExportError {
    pub fn new(method: impl Into<String>, path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            source,
        }
    }
}
