//! Unified error type for the preview pipeline.

pub use crate::archive::errors::{ArchiveError, ArchiveResult};
pub use crate::compose::errors::{ComposeError, ComposeResult};
pub use crate::package::errors::{ParseError, ResolveError, ResolveResult};
use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, PreviewError>`.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Possible errors from a [`Preview`](crate::Preview).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    /// The EPUB could not be extracted.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// The extracted EPUB has no usable package.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A chapter could not be composed.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// The composed index document could not be written.
    #[error("[Io - `{}`]: {source}", path.display())]
    Io {
        /// The root cause of the error.
        source: io::Error,
        /// The location responsible for triggering the error.
        path: PathBuf,
    },
}
