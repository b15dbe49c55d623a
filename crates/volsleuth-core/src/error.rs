/// Engine error type.
///
/// Only top-level operations report failures. Errors met while walking
/// below a directory are swallowed where they happen and contribute zero
/// bytes, so nothing in here describes a partial traversal.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// None of the candidate mount points is accessible.
    #[error("no storage volumes found")]
    NoVolumesFound,

    /// The directory to list could not be opened.
    #[error("failed to scan {}: {source}", path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry could not be removed. A directory may be partially gone.
    #[error("failed to delete {}: {source}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The breadcrumb stack is already at its maximum depth.
    #[error("navigation depth limit ({max_depth}) reached")]
    NavigationFull { max_depth: usize },

    /// The breadcrumb stack holds only the volume root.
    #[error("already at the volume root")]
    AtRoot,

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
