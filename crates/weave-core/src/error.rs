//! Error types for weave-core
//!
//! Only invocation-fatal conditions live here. Recoverable conditions are
//! [`Warning`](crate::Warning) values collected next to the result.

use std::path::PathBuf;

/// Result type for weave-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an invocation before any output is written
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required snippet tier does not exist
    #[error("Snippet tier not found: {path}")]
    TierNotFound { path: PathBuf },

    /// A snippet tier path exists but is not a directory
    #[error("Snippet tier is not a directory: {path}")]
    TierNotDirectory { path: PathBuf },

    /// A snippet tier directory could not be listed
    #[error("Failed to read snippet tier {path}: {source}")]
    TierUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The separator cannot be matched as a single line of a document
    #[error("Invalid separator {separator:?}: must be a single non-blank line")]
    InvalidSeparator { separator: String },

    /// The previously generated document exists but cannot be read
    #[error("Failed to read existing output: {source}")]
    OutputUnreadable {
        path: PathBuf,
        #[source]
        source: weave_fs::Error,
    },

    /// The generated document could not be written
    #[error("Failed to write output: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: weave_fs::Error,
    },

    /// Filesystem error from weave-fs
    #[error(transparent)]
    Fs(#[from] weave_fs::Error),
}
