use crate::preview::util::{self, CONTAINER};
use epub_preview::errors::ResolveError;
use epub_preview::package::{self, Package};
use std::path::PathBuf;

#[test]
fn test_resolve_spine_order() {
    let root = util::example_epub();
    let package = epub_preview::resolve_package(&root).unwrap();
    let base_folder = root.join("OEBPS");

    assert_eq!(base_folder, package.base_folder());

    // The manifest lists c2 before c1; the dangling `not-in-manifest`
    // idref and the non-document `cover-image` are skipped.
    #[rustfmt::skip]
    let expected = [
        "text/cover.xhtml",
        "text/c1.xhtml",
        "text/c2.html",
    ].map(|href| base_folder.join(href));

    assert_eq!(expected.as_slice(), package.chapters());
    assert_eq!(3, package.len());
    assert!(!package.is_empty());
}

#[test]
fn test_resolve_relative_root() {
    let root = util::example_epub();
    let relative = PathBuf::from("tests/ebooks/example_epub");
    let package = epub_preview::resolve_package(relative).unwrap();

    assert_eq!(root.join("OEBPS"), package.base_folder());
}

#[test]
fn test_resolve_without_container() {
    let opf = util::opf(&[("a", "a.xhtml"), ("b", "sub/b.xhtml")], &["b", "a"]);
    let dir = util::write_tree(&[
        ("mimetype", b"application/epub+zip"),
        ("content/book.OPF", opf.as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();
    let package = epub_preview::resolve_package(&root).unwrap();
    let base_folder = root.join("content");

    assert_eq!(base_folder, package.base_folder());
    assert_eq!(
        [base_folder.join("sub/b.xhtml"), base_folder.join("a.xhtml")].as_slice(),
        package.chapters(),
    );
}

#[test]
fn test_resolve_container_fallback() {
    let opf = util::opf(&[("a", "a.html")], &["a"]);

    #[rustfmt::skip]
    let containers = [
        // Points at a missing file
        CONTAINER,
        // No rootfile elements
        r#"<container><rootfiles/></container>"#,
        // Blank full-path
        r#"<container><rootfiles><rootfile full-path="  "/></rootfiles></container>"#,
    ];

    for container in containers {
        let dir = util::write_tree(&[
            ("META-INF/container.xml", container.as_bytes()),
            ("EPUB/package.opf", opf.as_bytes()),
        ]);
        let root = dir.path().canonicalize().unwrap();
        let package = epub_preview::resolve_package(&root).unwrap();

        assert_eq!(root.join("EPUB"), package.base_folder(), "{container}");
        assert_eq!([root.join("EPUB/a.html")].as_slice(), package.chapters());
    }
}

#[test]
fn test_resolve_malformed_container() {
    let opf = util::opf(&[("a", "a.xhtml")], &["a"]);
    let dir = util::write_tree(&[
        (
            "META-INF/container.xml",
            b"<container><rootfiles></container>",
        ),
        ("OPS/package.opf", opf.as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();
    let container = root.join("META-INF/container.xml");
    let error = epub_preview::resolve_package(&root).unwrap_err();

    // An unreadable pointer is reported rather than scanned past
    assert!(error.is_malformed());
    assert!(
        matches!(&error, ResolveError::Parse(parse) if parse.path == container),
        "{error:?}"
    );
    assert!(matches!(package::locate(&root), Err(ResolveError::Parse(_))));
}

#[test]
fn test_resolve_container_over_scan() {
    let preferred = util::opf(&[("a", "a.xhtml")], &["a"]);
    let ignored = util::opf(&[("z", "z.xhtml")], &["z"]);
    let dir = util::write_tree(&[
        ("META-INF/container.xml", CONTAINER.as_bytes()),
        // Sorts before `OPS/` during a scan
        ("A/ignored.opf", ignored.as_bytes()),
        ("OPS/package.opf", preferred.as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();

    assert_eq!(root.join("OPS/package.opf"), package::locate(&root).unwrap());
}

#[test]
fn test_resolve_encoded_hrefs() {
    let opf = util::opf(
        &[("a", "My%20Chapter.xhtml"), ("b", "../shared/b.xhtml?v=1#top")],
        &["a", "b"],
    );
    let dir = util::write_tree(&[
        ("META-INF/container.xml", CONTAINER.as_bytes()),
        ("OPS/package.opf", opf.as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();
    let package = epub_preview::resolve_package(&root).unwrap();

    assert_eq!(
        [root.join("OPS/My Chapter.xhtml"), root.join("shared/b.xhtml")].as_slice(),
        package.chapters(),
    );
}

#[test]
fn test_resolve_no_documents() {
    let opf = util::opf(&[("img", "cover.png"), ("css", "style.css")], &["img", "css", "gone"]);
    let dir = util::write_tree(&[
        ("META-INF/container.xml", CONTAINER.as_bytes()),
        ("OPS/package.opf", opf.as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();
    let error = epub_preview::resolve_package(&root).unwrap_err();

    assert!(error.is_malformed());
    assert!(
        matches!(&error, ResolveError::MalformedPackage { path, .. } if *path == root.join("OPS/package.opf")),
        "{error:?}"
    );
}

#[test]
fn test_resolve_empty_spine() {
    let opf = util::opf(&[("a", "a.xhtml")], &[]);
    let dir = util::write_tree(&[("package.opf", opf.as_bytes())]);
    let error = epub_preview::resolve_package(dir.path()).unwrap_err();

    assert!(matches!(error, ResolveError::MalformedPackage { .. }), "{error:?}");
}

#[test]
fn test_resolve_not_found() {
    let dir = util::write_tree(&[
        ("mimetype", b"application/epub+zip"),
        ("OPS/chapter.xhtml", util::chapter("<p/>").as_bytes()),
    ]);
    let root = dir.path().canonicalize().unwrap();
    let error = epub_preview::resolve_package(&root).unwrap_err();

    assert!(!error.is_malformed());
    assert!(
        matches!(&error, ResolveError::PackageDefinitionNotFound { root: searched } if *searched == root),
        "{error:?}"
    );
}

#[test]
fn test_resolve_unparsable_package() {
    let dir = util::write_tree(&[(
        "package.opf",
        b"<package><manifest><item id=\"a\" href=\"a.xhtml\"/></spine></package>",
    )]);
    let error = epub_preview::resolve_package(dir.path()).unwrap_err();

    assert!(error.is_malformed());
    assert!(matches!(error, ResolveError::Parse(_)), "{error:?}");
}

#[test]
fn test_resolve_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let error = epub_preview::resolve_package(&missing).unwrap_err();

    assert!(matches!(&error, ResolveError::Io { path, .. } if *path == missing), "{error:?}");
}

#[test]
fn test_package_requires_chapters() {
    let error = Package::new("/books/OPS", Vec::new()).unwrap_err();

    assert!(error.is_malformed());

    let package = Package::new("/books/OPS", vec![PathBuf::from("/books/OPS/a.xhtml")]).unwrap();
    let (base_folder, chapters) = package.into_parts();

    assert_eq!(PathBuf::from("/books/OPS"), base_folder);
    assert_eq!(vec![PathBuf::from("/books/OPS/a.xhtml")], chapters);
}
