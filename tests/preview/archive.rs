use crate::preview::util;
use epub_preview::errors::ArchiveError;
use std::fs;

#[test]
fn test_extract_directory() {
    let work_dir = tempfile::tempdir().unwrap();
    let destination = work_dir.path().join("nested/example_epub");
    let root = epub_preview::extract(util::EXAMPLE_EPUB, &destination).unwrap();

    assert_eq!(destination.canonicalize().unwrap(), root);
    assert_eq!(util::list_files(&util::example_epub()), util::list_files(&root));

    for file in util::list_files(&root) {
        assert_eq!(
            fs::read(util::example_epub().join(&file)).unwrap(),
            fs::read(root.join(&file)).unwrap(),
            "{file}"
        );
    }
}

#[test]
fn test_extract_zip_matches_directory() {
    let work_dir = tempfile::tempdir().unwrap();
    let epub = work_dir.path().join("example.epub");
    util::zip_dir(&util::example_epub(), &epub);

    let from_zip = epub_preview::extract(&epub, work_dir.path().join("zipped")).unwrap();
    let from_dir = epub_preview::extract(util::EXAMPLE_EPUB, work_dir.path().join("unzipped")).unwrap();

    assert_eq!(util::list_files(&from_dir), util::list_files(&from_zip));
    assert_eq!(
        fs::read(from_dir.join("OEBPS/content.opf")).unwrap(),
        fs::read(from_zip.join("OEBPS/content.opf")).unwrap(),
    );

    let zipped = epub_preview::resolve_package(&from_zip).unwrap();
    let unzipped = epub_preview::resolve_package(&from_dir).unwrap();
    let relative = |package: &epub_preview::Package, root: &std::path::Path| {
        package
            .chapters()
            .iter()
            .map(|chapter| chapter.strip_prefix(root).unwrap().to_path_buf())
            .collect::<Vec<_>>()
    };

    assert_eq!(relative(&unzipped, &from_dir), relative(&zipped, &from_zip));
}

#[test]
fn test_extract_unreadable() {
    let work_dir = tempfile::tempdir().unwrap();
    let not_zip = work_dir.path().join("not_zip.epub");
    fs::write(&not_zip, "plain text").unwrap();

    #[rustfmt::skip]
    let archives = [
        work_dir.path().join("missing.epub"),
        not_zip,
    ];

    for archive in archives {
        let error = epub_preview::extract(&archive, work_dir.path().join("out")).unwrap_err();

        assert!(
            matches!(&error, ArchiveError::UnreadableArchive { path, .. } if *path == archive),
            "{error:?}"
        );
    }
}

#[test]
fn test_extract_into_source() {
    let dir = util::write_tree(&[("mimetype", b"application/epub+zip")]);
    let error = epub_preview::extract(dir.path(), dir.path().join("copy")).unwrap_err();

    assert!(matches!(error, ArchiveError::CannotWrite { .. }), "{error:?}");
}
