//! Error-related types for [`extract`](super::extract).

use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, ArchiveError>`.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Possible errors when extracting an EPUB archive.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ArchiveError {
    /// The archive itself is unreadable due to not existing,
    /// unsupported format, or malformed state.
    #[error("[UnreadableArchive - `{}`]: {source}", path.display())]
    UnreadableArchive {
        /// The root cause of this error.
        source: io::Error,
        /// The archive responsible for triggering the error.
        path: PathBuf,
    },

    /// Extracted content could not be written to the destination.
    #[error("[CannotWrite - `{}`]: {source}", path.display())]
    CannotWrite {
        /// The root cause of this error.
        source: io::Error,
        /// The destination location responsible for triggering the error.
        path: PathBuf,
    },
}
