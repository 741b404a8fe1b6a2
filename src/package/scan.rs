use crate::package::consts;
use crate::package::errors::{ResolveError, ResolveResult};
use crate::util::uri;
use std::path::{Path, PathBuf};

/// Recursively searches `dir` for the first package `.opf` file.
///
/// Entries are visited in file-name order, so the outcome does not depend
/// on the order the filesystem happens to list them in.
pub(super) fn find_package_file(dir: &Path) -> ResolveResult<Option<PathBuf>> {
    let mut entries = dir
        .read_dir()
        .and_then(|read_dir| read_dir.collect::<Result<Vec<_>, _>>())
        .map_err(ResolveError::io(dir))?;

    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(ResolveError::io(&path))?;

        // Symlinks are not followed
        if file_type.is_symlink() {
            continue;
        }
        if file_type.is_dir() {
            if let Some(found) = find_package_file(&path)? {
                return Ok(Some(found));
            }
        } else if uri::has_extension(&path, consts::PACKAGE_EXTENSIONS) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}
