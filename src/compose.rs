//! The document compositor.
//!
//! Flattens the chapters of a [`Package`] into one self-contained HTML
//! document. Each chapter contributes only its `<body>` content, wrapped in
//! `<section class="chapter" id="ch{n}">`, with relative `src`/`href` values
//! rewritten to `file://` URLs that resolve against the package base folder.

mod body;
pub mod errors;
mod rewrite;
mod shell;

pub use self::shell::{DEFAULT_STYLESHEET, error_page, loading_page};

use crate::compose::errors::{ComposeError, ComposeResult};
use crate::package::Package;
use crate::util::utf;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The flattened HTML of every chapter, paired with the folder
/// that any remaining relative reference resolves against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedDocument {
    html: String,
    base_folder: PathBuf,
}

impl ComposedDocument {
    /// The complete HTML document.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The package base folder used for resource resolution.
    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    /// Returns the HTML and base folder.
    pub fn into_parts(self) -> (String, PathBuf) {
        (self.html, self.base_folder)
    }

    /// Writes the HTML to `file_name` within `directory`,
    /// returning the written location.
    pub fn write_to(&self, directory: impl AsRef<Path>, file_name: &str) -> io::Result<PathBuf> {
        let path = directory.as_ref().join(file_name);

        fs::write(&path, &self.html)?;
        Ok(path)
    }
}

/// Composes chapters into a single document with a fixed stylesheet.
///
/// # Examples
/// ```no_run
/// # use epub_preview::compose::Compositor;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let package = epub_preview::resolve_package("/tmp/extracted_epub")?;
/// let document = Compositor::new("body { margin: 0; }").compose(package)?;
///
/// println!("{}", document.html());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Compositor {
    stylesheet: Cow<'static, str>,
}

impl Compositor {
    /// Creates a compositor embedding `stylesheet` in every document.
    pub fn new(stylesheet: impl Into<Cow<'static, str>>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    /// The stylesheet embedded in composed documents.
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Composes every chapter of `package`, in spine order.
    ///
    /// # Errors
    /// - [`Io`](ComposeError::Io): A chapter could not be read.
    ///   No partial document is returned.
    pub fn compose(&self, package: Package) -> ComposeResult<ComposedDocument> {
        let (base_folder, chapters) = package.into_parts();
        let mut sections = String::new();

        for (index, chapter) in chapters.iter().enumerate() {
            let data = fs::read(chapter).map_err(|source| ComposeError::Io {
                source,
                path: chapter.clone(),
            })?;
            let text = utf::decode_text(&data);
            let content = rewrite::rewrite_resource_urls(body::extract_body(&text), &base_folder);

            debug!(index, chapter = %chapter.display(), "Composed chapter");
            shell::push_chapter(&mut sections, index, &content);
        }

        info!(chapters = chapters.len(), "Composed document");
        Ok(ComposedDocument {
            html: shell::assemble(&self.stylesheet, &sections),
            base_folder,
        })
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET)
    }
}

/// Composes `package` with the [`DEFAULT_STYLESHEET`].
///
/// See [`Compositor::compose`].
pub fn compose(package: Package) -> ComposeResult<ComposedDocument> {
    Compositor::default().compose(package)
}
