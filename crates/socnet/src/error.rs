//! Error types for socnet operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for socnet library operations.
///
/// Queries never fail: unknown users degrade to empty results. Only reading
/// the network file can produce an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The network file could not be opened.
    #[error("Could not open network file {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened network source failed.
    #[error("Failed to read network file {}: {source}", path.display())]
    Read {
        /// Path of the source being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// A specialized Result type for socnet operations.
pub type Result<T> = std::result::Result<T, Error>;
