//! # epub-preview
//!
//! Flattens an EPUB into a single self-contained HTML document
//! suitable for a generic preview surface.
//!
//! The pipeline is strictly sequential:
//! 1. [`archive`]: Extract a zipped `.epub` (or copy an unzipped directory).
//! 2. [`package`]: Resolve the package document and recover the chapters
//!    in spine order.
//! 3. [`compose`]: Merge each chapter's `<body>` into one document,
//!    rewriting relative `src`/`href` values to `file://` URLs.
//!
//! ## Examples
//! Running the whole pipeline:
//! ```no_run
//! # use epub_preview::errors::PreviewResult;
//! use epub_preview::Preview;
//!
//! # fn main() -> PreviewResult<()> {
//! let preview = Preview::open("example.epub", "/tmp/example_epub")?;
//!
//! println!("{}", preview.document().html());
//! # Ok(())
//! # }
//! ```
//! Running each stage separately:
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = epub_preview::extract("example.epub", "/tmp/example_epub")?;
//! let package = epub_preview::resolve_package(&root)?;
//! let document = epub_preview::compose(package)?;
//!
//! assert!(document.html().contains(r#"<section class="chapter" id="ch0">"#));
//! # Ok(())
//! # }
//! ```
//! Showing a failure instead of a blank view:
//! ```no_run
//! use epub_preview::{Preview, error_page};
//!
//! let html = match Preview::open("broken.epub", "/tmp/broken_epub") {
//!     Ok(preview) => preview.into_document().into_parts().0,
//!     Err(error) => error_page(&error),
//! };
//! ```

pub mod archive;
pub mod compose;
pub mod errors;
pub mod package;
mod parser;
mod preview;
mod util;

pub use self::{
    archive::extract,
    compose::{
        ComposedDocument, Compositor, DEFAULT_STYLESHEET, compose, error_page, loading_page,
    },
    package::{Package, resolve_package},
    preview::{Preview, PreviewSettings, PreviewSettingsBuilder},
};
