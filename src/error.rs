//! Error types for iframe-extract.
//!
//! Only failures the pipeline cannot recover from live here. Decoding
//! failures under the primary encoding are handled inside
//! [`crate::encoding`] and never reach this type.

use std::io;
use std::path::PathBuf;

/// Error type for the extraction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file is missing, unreadable, or permission-denied.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing the report to its destination failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
