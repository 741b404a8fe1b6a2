use crate::archive::Source;
use crate::archive::errors::{ArchiveError, ArchiveResult};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive as Zip;
use zip::result::ZipError;

/// A zipped `.epub` file.
pub(crate) struct ZipSource {
    zip: Zip<BufReader<File>>,
    path: PathBuf,
}

impl ZipSource {
    pub(crate) fn new(path: &Path) -> ArchiveResult<Self> {
        let unreadable = |source| ArchiveError::UnreadableArchive {
            source,
            path: path.to_path_buf(),
        };
        let file = File::open(path).map_err(unreadable)?;
        let zip = Zip::new(BufReader::new(file)).map_err(|error| unreadable(io::Error::from(error)))?;

        Ok(Self {
            zip,
            path: path.to_path_buf(),
        })
    }
}

impl Source for ZipSource {
    fn extract_into(&mut self, destination: &Path) -> ArchiveResult<()> {
        // Entries with names escaping the destination are rejected by `zip`
        self.zip.extract(destination).map_err(|error| match error {
            ZipError::Io(source) => ArchiveError::CannotWrite {
                source,
                path: destination.to_path_buf(),
            },
            error => ArchiveError::UnreadableArchive {
                source: io::Error::from(error),
                path: self.path.clone(),
            },
        })
    }
}
