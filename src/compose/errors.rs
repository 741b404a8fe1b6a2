//! Error-related types for [`compose`](super::compose).

use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, ComposeError>`.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Possible errors when composing a [`ComposedDocument`](super::ComposedDocument).
///
/// Loose markup never produces an error;
/// only failing to read a chapter aborts composition.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ComposeError {
    /// A chapter document could not be read.
    #[error("[Io - `{}`]: {source}", path.display())]
    Io {
        /// The root cause of the error.
        source: io::Error,
        /// The chapter responsible for triggering the error.
        path: PathBuf,
    },
}
