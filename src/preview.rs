//! The end-to-end preview pipeline: extract, resolve, compose.

use crate::archive;
use crate::compose::{ComposedDocument, Compositor, DEFAULT_STYLESHEET};
use crate::errors::{PreviewError, PreviewResult};
use crate::package;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// A flattened EPUB, ready to hand to a renderer.
///
/// # Examples
/// ```no_run
/// # use epub_preview::errors::PreviewResult;
/// # use epub_preview::Preview;
/// # fn main() -> PreviewResult<()> {
/// let preview = Preview::open("/ebooks/zipped.epub", "/tmp/zipped_epub")?;
///
/// // Render `preview.document().html()` with
/// // `preview.document().base_folder()` as the base location.
/// if let Some(index) = preview.index() {
///     println!("Wrote {}", index.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Preview {
    root: PathBuf,
    document: ComposedDocument,
    index: Option<PathBuf>,
}

impl Preview {
    /// Opens `epub` with default [`PreviewSettings`],
    /// extracting into `work_dir`.
    ///
    /// See [`Self::open_with`] for more details.
    pub fn open(epub: impl AsRef<Path>, work_dir: impl AsRef<Path>) -> PreviewResult<Self> {
        Self::open_with(epub, work_dir, PreviewSettings::default())
    }

    /// Opens `epub` with the specified [`PreviewSettings`],
    /// extracting into `work_dir`.
    ///
    /// The provided path may be an EPUB **file** or **directory**
    /// containing the contents of an unzipped EPUB.
    ///
    /// # Errors
    /// - [`Archive`](PreviewError::Archive): The EPUB could not be extracted.
    /// - [`Resolve`](PreviewError::Resolve): No usable package was found.
    /// - [`Compose`](PreviewError::Compose): A chapter could not be read.
    /// - [`Io`](PreviewError::Io): The index document could not be written.
    pub fn open_with(
        epub: impl AsRef<Path>,
        work_dir: impl AsRef<Path>,
        settings: impl Into<PreviewSettings>,
    ) -> PreviewResult<Self> {
        let settings = settings.into();
        let root = archive::extract(epub, work_dir)?;
        let package = package::resolve_package(&root)?;
        let document = Compositor::new(settings.stylesheet).compose(package)?;

        let index = match settings.index_file.as_deref() {
            Some(file_name) => Some(document.write_to(&root, file_name).map_err(|source| {
                PreviewError::Io {
                    source,
                    path: root.join(file_name),
                }
            })?),
            None => None,
        };
        if let Some(index) = &index {
            info!(index = %index.display(), "Wrote preview index");
        }

        Ok(Self {
            root,
            document,
            index,
        })
    }

    /// The canonical extraction root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The composed document.
    pub fn document(&self) -> &ComposedDocument {
        &self.document
    }

    /// The written index document, if [`PreviewSettings::index_file`] is set.
    pub fn index(&self) -> Option<&Path> {
        self.index.as_deref()
    }

    /// Returns the composed document.
    pub fn into_document(self) -> ComposedDocument {
        self.document
    }
}

/// Settings for a [`Preview`].
///
/// To create a mutable settings instance, see
/// [`PreviewSettings::builder`] or [`PreviewSettings::default`].
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PreviewSettings {
    /// The stylesheet embedded in the composed document.
    ///
    /// Default: [`DEFAULT_STYLESHEET`]
    pub stylesheet: Cow<'static, str>,
    /// The file name of the index document written into the extraction root.
    /// When [`None`], no file is written.
    ///
    /// Default: `preview_index.html`
    pub index_file: Option<String>,
}

impl PreviewSettings {
    /// Returns a builder to create a [`PreviewSettings`] instance.
    pub fn builder() -> PreviewSettingsBuilder {
        PreviewSettingsBuilder(Self::default())
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            stylesheet: Cow::Borrowed(DEFAULT_STYLESHEET),
            index_file: Some(String::from("preview_index.html")),
        }
    }
}

impl From<PreviewSettingsBuilder> for PreviewSettings {
    fn from(value: PreviewSettingsBuilder) -> Self {
        value.build()
    }
}

/// Builder to construct a [`PreviewSettings`] instance.
///
/// # Examples
/// ```no_run
/// # use epub_preview::errors::PreviewResult;
/// # use epub_preview::{Preview, PreviewSettings};
/// # fn main() -> PreviewResult<()> {
/// let preview = Preview::open_with(
///     "/ebooks/zipped.epub",
///     "/tmp/zipped_epub",
///     PreviewSettings::builder()
///         .stylesheet("body { max-width: 40em; }")
///         .index_file(None),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PreviewSettingsBuilder(PreviewSettings);

impl PreviewSettingsBuilder {
    /// Turn this builder into a [`PreviewSettings`] instance.
    pub fn build(self) -> PreviewSettings {
        self.0
    }

    /// See [`PreviewSettings::stylesheet`].
    pub fn stylesheet(mut self, stylesheet: impl Into<Cow<'static, str>>) -> Self {
        self.0.stylesheet = stylesheet.into();
        self
    }

    /// See [`PreviewSettings::index_file`].
    pub fn index_file(mut self, file_name: Option<&str>) -> Self {
        self.0.index_file = file_name.map(String::from);
        self
    }
}
