//! The package resolver.
//!
//! Turns the root of an extracted EPUB into a [`Package`]: the ordered
//! chapter documents named by the spine, plus the folder every chapter and
//! resource reference resolves against.
//!
//! # Locating the package document
//! 1. `META-INF/container.xml` is read and the first `rootfile` element
//!    carrying a `full-path` attribute is followed.
//! 2. If the container pointer is missing, holds no usable `rootfile`,
//!    or points at a file that does not exist, the root is scanned
//!    recursively for the first `.opf` file instead.

mod consts;
mod container;
pub mod errors;
mod opf;
mod scan;

use crate::package::errors::{ResolveError, ResolveResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The resolved unit of work: chapters in reading order and their base folder.
///
/// A [`Package`] always contains at least one chapter.
///
/// # Examples
/// ```no_run
/// # use epub_preview::package::errors::ResolveResult;
/// # fn main() -> ResolveResult<()> {
/// let package = epub_preview::resolve_package("/tmp/extracted_epub")?;
///
/// for chapter in package.chapters() {
///     println!("{}", chapter.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    base_folder: PathBuf,
    chapters: Vec<PathBuf>,
}

impl Package {
    /// Creates a [`Package`] from a base folder and ordered chapter locations.
    ///
    /// # Errors
    /// - [`MalformedPackage`](ResolveError::MalformedPackage): `chapters` is empty.
    pub fn new(base_folder: impl Into<PathBuf>, chapters: Vec<PathBuf>) -> ResolveResult<Self> {
        let base_folder = base_folder.into();

        if chapters.is_empty() {
            return Err(ResolveError::MalformedPackage {
                path: base_folder,
                reason: "The spine does not reference any (x)html chapter documents",
            });
        }
        Ok(Self {
            base_folder,
            chapters,
        })
    }

    /// The absolute directory containing the package `.opf` file.
    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    /// Absolute chapter document locations in spine order.
    pub fn chapters(&self) -> &[PathBuf] {
        &self.chapters
    }

    /// The number of chapters, which is never zero.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Returns the base folder and chapters.
    pub fn into_parts(self) -> (PathBuf, Vec<PathBuf>) {
        (self.base_folder, self.chapters)
    }
}

/// Resolves the [`Package`] of an already-extracted EPUB at `root`.
///
/// # Errors
/// - [`PackageDefinitionNotFound`](ResolveError::PackageDefinitionNotFound):
///   No `.opf` file could be located.
/// - [`MalformedPackage`](ResolveError::MalformedPackage):
///   The spine resolves to no chapter documents.
/// - [`Parse`](ResolveError::Parse): The container or package document is not well-formed XML.
/// - [`Io`](ResolveError::Io): `root` or a package file could not be read.
pub fn resolve_package(root: impl AsRef<Path>) -> ResolveResult<Package> {
    let root = root.as_ref();
    let root = root.canonicalize().map_err(ResolveError::io(root))?;
    let package_file = locate(&root)?;
    let package = opf::read_package_file(&package_file)?;

    info!(
        package = %package_file.display(),
        chapters = package.len(),
        "Resolved package"
    );
    Ok(package)
}

/// Locates the package `.opf` file within `root`.
///
/// # Errors
/// - [`PackageDefinitionNotFound`](ResolveError::PackageDefinitionNotFound):
///   Both the container pointer and the directory scan came up empty.
/// - [`Parse`](ResolveError::Parse): The container pointer is not well-formed XML.
/// - [`Io`](ResolveError::Io): A file or directory could not be read.
pub fn locate(root: impl AsRef<Path>) -> ResolveResult<PathBuf> {
    let root = root.as_ref();

    match container::read_container(root) {
        Ok(Some(package_file)) if package_file.is_file() => return Ok(package_file),
        Ok(Some(package_file)) => warn!(
            package = %package_file.display(),
            "Container references a missing package file; scanning instead"
        ),
        Ok(None) => warn!("Container has no usable `rootfile`; scanning instead"),
        Err(ResolveError::ContainerNotFound { path }) => {
            warn!(container = %path.display(), "Missing container; scanning instead")
        }
        Err(error) => return Err(error),
    }

    scan::find_package_file(root)?.ok_or_else(|| ResolveError::PackageDefinitionNotFound {
        root: root.to_path_buf(),
    })
}
