//! Extraction of an EPUB into a directory tree.
//!
//! Resolution and composition only operate on extracted files,
//! so both zipped `.epub` files and already-unzipped directories
//! are materialized into a destination directory first.

mod directory;
pub mod errors;
mod zip;

use crate::archive::directory::DirectorySource;
use crate::archive::errors::{ArchiveError, ArchiveResult};
use crate::archive::zip::ZipSource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Content that can be materialized into a destination directory.
pub(crate) trait Source {
    fn extract_into(&mut self, destination: &Path) -> ArchiveResult<()>;
}

/// Unzip the file if it is not a directory.
///
/// If it is, the contents are copied verbatim instead.
fn get_source(path: &Path) -> ArchiveResult<Box<dyn Source>> {
    Ok(if path.is_file() {
        Box::new(ZipSource::new(path)?)
    } else {
        Box::new(DirectorySource::new(path)?)
    })
}

/// Extracts the EPUB at `archive` into `destination`,
/// returning the canonical extraction root.
///
/// `archive` may be an EPUB **file** or a **directory** containing the
/// contents of an unzipped EPUB. `destination` is created if needed.
///
/// # Errors
/// - [`UnreadableArchive`](ArchiveError::UnreadableArchive):
///   `archive` is missing, not a zip file, or malformed.
/// - [`CannotWrite`](ArchiveError::CannotWrite):
///   `destination` could not be written, or lies within `archive`.
///
/// # Examples
/// ```no_run
/// # use epub_preview::archive::errors::ArchiveResult;
/// # fn main() -> ArchiveResult<()> {
/// let root = epub_preview::extract("/ebooks/zipped.epub", "/tmp/zipped_epub")?;
/// let root = epub_preview::extract("/ebooks/unzipped_epub_dir", "/tmp/unzipped_epub")?;
/// # Ok(())
/// # }
/// ```
pub fn extract(archive: impl AsRef<Path>, destination: impl AsRef<Path>) -> ArchiveResult<PathBuf> {
    let (archive, destination) = (archive.as_ref(), destination.as_ref());
    let cannot_write = |source| ArchiveError::CannotWrite {
        source,
        path: destination.to_path_buf(),
    };
    let mut source = get_source(archive)?;

    fs::create_dir_all(destination).map_err(cannot_write)?;
    let destination = destination.canonicalize().map_err(cannot_write)?;

    // Copying a directory into itself would never terminate
    if archive.is_dir()
        && archive
            .canonicalize()
            .is_ok_and(|archive| destination.starts_with(archive))
    {
        return Err(cannot_write(io::Error::new(
            io::ErrorKind::InvalidInput,
            "The destination lies within the source directory",
        )));
    }

    source.extract_into(&destination)?;
    info!(
        archive = %archive.display(),
        destination = %destination.display(),
        "Extracted EPUB"
    );
    Ok(destination)
}
