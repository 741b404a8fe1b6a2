use crate::package::Package;
use crate::package::consts::{self, bytes};
use crate::package::errors::{ParseError, ResolveError, ResolveResult};
use crate::parser::ParserResult;
use crate::parser::xml::{ByteReader, XmlElement, XmlReader};
use crate::util::{uri, utf};
use quick_xml::events::Event;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The raw manifest and spine of a package `.opf` file.
#[derive(Debug, Default)]
struct PackageData {
    /// `id` -> `href`
    manifest: HashMap<String, String>,
    /// `idref` values in reading order
    spine: Vec<String>,
}

impl PackageData {
    /// Resolves each spine entry through the manifest, in spine order.
    ///
    /// Dangling references are skipped.
    fn spine_hrefs(&self) -> impl Iterator<Item = &str> {
        self.spine.iter().filter_map(|idref| {
            let href = self.manifest.get(idref);

            if href.is_none() {
                debug!(%idref, "Skipping spine entry with no matching manifest item");
            }
            href.map(String::as_str)
        })
    }
}

/// Parses the package `.opf` file at `path` into a [`Package`].
pub(super) fn read_package_file(path: &Path) -> ResolveResult<Package> {
    let data = fs::read(path).map_err(ResolveError::io(path))?;
    let package = parse_opf(&utf::decode_text(&data)).map_err(|source| ParseError {
        source,
        path: path.to_path_buf(),
    })?;

    // The directory containing the `.opf` file is the resolution base
    let base_folder = path.parent().unwrap_or(Path::new("/")).to_path_buf();
    let chapters = package
        .spine_hrefs()
        .map(|href| uri::resolve(&base_folder, uri::split_suffix(href).0))
        .filter(|chapter| {
            let is_chapter = uri::has_extension(chapter, consts::CHAPTER_EXTENSIONS);

            if !is_chapter {
                debug!(path = %chapter.display(), "Skipping non-document spine entry");
            }
            is_chapter
        })
        .collect();

    Package::new(base_folder, chapters).map_err(|error| match error {
        ResolveError::MalformedPackage { reason, .. } => ResolveError::MalformedPackage {
            path: path.to_path_buf(),
            reason,
        },
        error => error,
    })
}

fn parse_opf(xml: &str) -> ParserResult<PackageData> {
    let mut reader = ByteReader::from_reader(xml.as_bytes());
    let mut package = PackageData::default();

    while let Some(event) = reader.next() {
        let Event::Start(el) = event? else {
            continue;
        };
        if el.is_local_name(bytes::MANIFEST) {
            parse_manifest(&mut reader, &mut package.manifest)?;
        } else if el.is_local_name(bytes::SPINE) {
            parse_spine(&mut reader, &mut package.spine)?;
        }
    }
    Ok(package)
}

fn parse_manifest(
    reader: &mut ByteReader,
    manifest: &mut HashMap<String, String>,
) -> ParserResult<()> {
    while let Some(el) = reader.next_child(bytes::MANIFEST, bytes::ITEM)? {
        match (el.get_attribute(consts::ID), el.get_attribute(consts::HREF)) {
            // On duplicate ids, the last entry wins
            (Some(id), Some(href)) => {
                manifest.insert(id, href);
            }
            _ => debug!("Skipping manifest item missing an `id` or `href`"),
        }
    }
    Ok(())
}

fn parse_spine(reader: &mut ByteReader, spine: &mut Vec<String>) -> ParserResult<()> {
    while let Some(el) = reader.next_child(bytes::SPINE, bytes::ITEMREF)? {
        match el.get_attribute(consts::IDREF) {
            Some(idref) => spine.push(idref),
            None => debug!("Skipping spine itemref missing an `idref`"),
        }
    }
    Ok(())
}
