//! Error types for route rewriting.

use route_io::IoError;
use thiserror::Error;

/// Error types for rewrite operations.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Reading the source file failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Writing the rewritten text back failed. The file may be truncated.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target path as given by the caller.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: IoError,
    },
}
