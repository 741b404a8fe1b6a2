use crate::archive::Source;
use crate::archive::errors::{ArchiveError, ArchiveResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A directory containing the contents of an unzipped EPUB.
#[derive(Debug)]
pub(crate) struct DirectorySource(PathBuf);

impl DirectorySource {
    pub(crate) fn new(dir: &Path) -> ArchiveResult<Self> {
        match dir.canonicalize() {
            Ok(dir) if dir.is_dir() => Ok(Self(dir)),
            Ok(_) => Err(ArchiveError::UnreadableArchive {
                path: dir.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotADirectory),
            }),
            Err(source) => Err(ArchiveError::UnreadableArchive {
                path: dir.to_path_buf(),
                source,
            }),
        }
    }
}

impl Source for DirectorySource {
    fn extract_into(&mut self, destination: &Path) -> ArchiveResult<()> {
        copy_tree(&self.0, destination)
    }
}

/// Copies `from` into `to` verbatim.
///
/// Symlinks are not supported currently
/// (to avoid copying content from outside the EPUB).
fn copy_tree(from: &Path, to: &Path) -> ArchiveResult<()> {
    fn unreadable(path: &Path) -> impl FnOnce(io::Error) -> ArchiveError {
        let path = path.to_path_buf();
        move |source| ArchiveError::UnreadableArchive { source, path }
    }
    fn cannot_write(path: &Path) -> impl FnOnce(io::Error) -> ArchiveError {
        let path = path.to_path_buf();
        move |source| ArchiveError::CannotWrite { source, path }
    }

    fs::create_dir_all(to).map_err(cannot_write(to))?;

    for entry in from.read_dir().map_err(unreadable(from))? {
        let entry = entry.map_err(unreadable(from))?;
        let file_type = entry.file_type().map_err(unreadable(&entry.path()))?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            copy_tree(&source, &target)?;
        } else {
            fs::copy(&source, &target).map_err(cannot_write(&target))?;
        }
    }
    Ok(())
}
