use crate::preview::util;
use epub_preview::errors::{PreviewError, ResolveError};
use epub_preview::{Preview, PreviewSettings, error_page, loading_page};
use std::fs;
use std::thread;

#[test]
fn test_preview_zip() {
    let work_dir = tempfile::tempdir().unwrap();
    let epub = work_dir.path().join("example.epub");
    util::zip_dir(&util::example_epub(), &epub);

    let preview = Preview::open(&epub, work_dir.path().join("extracted")).unwrap();
    let index = preview.index().unwrap();

    assert_eq!(preview.root().join("preview_index.html"), index);
    assert_eq!(preview.root().join("OEBPS"), preview.document().base_folder());
    assert_eq!(preview.document().html(), fs::read_to_string(index).unwrap());
    assert!(preview.document().html().contains(r#"id="ch2""#));
}

#[test]
fn test_preview_settings() {
    let work_dir = tempfile::tempdir().unwrap();
    let preview = Preview::open_with(
        util::EXAMPLE_EPUB,
        work_dir.path(),
        PreviewSettings::builder()
            .stylesheet("p { color: red; }")
            .index_file(None),
    )
    .unwrap();

    assert_eq!(None, preview.index());
    assert!(!preview.root().join("preview_index.html").exists());

    let html = preview.into_document().into_parts().0;
    assert!(html.contains("<style>p { color: red; }</style>"));
}

#[test]
fn test_preview_custom_index() {
    let work_dir = tempfile::tempdir().unwrap();
    let settings = PreviewSettings::builder().index_file(Some("book.html")).build();
    let preview = Preview::open_with(util::EXAMPLE_EPUB, work_dir.path(), settings).unwrap();

    assert_eq!(Some(preview.root().join("book.html").as_path()), preview.index());
}

#[test]
fn test_preview_error_page() {
    let work_dir = tempfile::tempdir().unwrap();
    let source = util::write_tree(&[("OPS/chapter.xhtml", b"<p/>")]);
    let error = Preview::open(source.path(), work_dir.path()).unwrap_err();

    assert!(
        matches!(error, PreviewError::Resolve(ResolveError::PackageDefinitionNotFound { .. })),
        "{error:?}"
    );

    let page = error_page(&error);
    assert!(page.contains("PackageDefinitionNotFound"));
    assert!(page.starts_with("<!doctype html>"));
}

#[test]
fn test_loading_page() {
    let page = loading_page();

    assert!(page.starts_with("<!doctype html>"));
    assert!(page.contains("Loading EPUB"));
}

#[test]
fn test_preview_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<epub_preview::Package>();
    assert_send_sync::<epub_preview::ComposedDocument>();
    assert_send_sync::<epub_preview::Compositor>();
    assert_send_sync::<Preview>();
    assert_send_sync::<PreviewSettings>();
    assert_send_sync::<PreviewError>();

    let package = epub_preview::resolve_package(util::EXAMPLE_EPUB).unwrap();
    let handle = thread::spawn(move || epub_preview::compose(package).unwrap());
    let document = handle.join().unwrap();

    assert!(document.html().contains(r#"id="ch2""#));
}
