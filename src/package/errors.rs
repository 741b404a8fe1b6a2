//! Error-related types for [`resolve_package`](super::resolve_package).

use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, ResolveError>`.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Possible errors when resolving a [`Package`](super::Package).
///
/// Resolution is all-or-nothing; no partial package is ever returned.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    /// The container-pointer file `META-INF/container.xml` does not exist.
    ///
    /// [`resolve_package`](super::resolve_package) recovers from this
    /// by scanning for an `.opf` file instead.
    #[error("[ContainerNotFound - `{}`]: Missing `META-INF/container.xml`", path.display())]
    ContainerNotFound {
        /// The expected location of the container-pointer file.
        path: PathBuf,
    },

    /// Neither the container pointer nor a directory scan
    /// located a package-definition (`.opf`) document.
    #[error("[PackageDefinitionNotFound - `{}`]: No package `.opf` file could be located", root.display())]
    PackageDefinitionNotFound {
        /// The extracted package root that was searched.
        root: PathBuf,
    },

    /// The package-definition document parsed, but its content is unusable,
    /// such as a spine that resolves to no chapter documents.
    #[error("[MalformedPackage - `{}`]: {reason}", path.display())]
    MalformedPackage {
        /// The package-definition document.
        path: PathBuf,
        /// Human-readable detail of the malformation.
        reason: &'static str,
    },

    /// An XML document could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A file or directory could not be read.
    #[error("[Io - `{}`]: {source}", path.display())]
    Io {
        /// The root cause of the error.
        source: io::Error,
        /// The location responsible for triggering the error.
        path: PathBuf,
    },
}

impl ResolveError {
    /// Returns `true` if the package content itself is malformed:
    /// [`MalformedPackage`](Self::MalformedPackage) or [`Parse`](Self::Parse).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPackage { .. } | Self::Parse(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { source, path }
    }
}

/// Unparsable XML content within a package document.
#[derive(thiserror::Error, Debug)]
#[error("[ParseError - `{}`]: {source}", path.display())]
pub struct ParseError {
    /// The underlying XML parser error.
    pub source: quick_xml::Error,
    /// The document that failed to parse.
    pub path: PathBuf,
}
