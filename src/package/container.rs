use crate::package::consts::{self, bytes};
use crate::package::errors::{ParseError, ResolveError, ResolveResult};
use crate::parser::ParserResult;
use crate::parser::xml::{ByteReader, XmlElement, XmlReader};
use crate::util::{uri, utf};
use quick_xml::events::Event;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `META-INF/container.xml` under `root` and returns the location
/// of the package `.opf` file it points to.
///
/// Returns [`None`] when the container holds no usable `rootfile`.
pub(super) fn read_container(root: &Path) -> ResolveResult<Option<PathBuf>> {
    let path = root.join(consts::CONTAINER);

    if !path.is_file() {
        return Err(ResolveError::ContainerNotFound { path });
    }
    let data = fs::read(&path).map_err(ResolveError::io(&path))?;
    let full_path = parse_container(&utf::decode_text(&data))
        .map_err(|source| ParseError { source, path })?;

    // `full-path` is relative to the root; a leading slash is tolerated.
    Ok(full_path.map(|full_path| {
        let relative = full_path.strip_prefix('/').unwrap_or(&full_path);
        uri::normalize(&root.join(relative))
    }))
}

/// Retrieves the `full-path` of the first `rootfile` element carrying one.
///
/// Although rare, multiple renditions could exist.
/// Only the first is accepted as it is the default.
fn parse_container(xml: &str) -> ParserResult<Option<String>> {
    let mut reader = ByteReader::from_reader(xml.as_bytes());

    while let Some(event) = reader.next() {
        let el = match event? {
            Event::Start(el) | Event::Empty(el) if el.is_local_name(bytes::ROOT_FILE) => el,
            _ => continue,
        };
        if let Some(full_path) = el.get_attribute(consts::FULL_PATH)
            && !full_path.trim().is_empty()
        {
            return Ok(Some(full_path.trim().to_owned()));
        }
    }
    Ok(None)
}
