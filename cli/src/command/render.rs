use clap::Args;
use epub_preview::errors::{PreviewError, PreviewResult};
use epub_preview::{Preview, PreviewSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Directory to extract into (defaults to a new temporary directory)
    #[arg(long)]
    out: Option<PathBuf>,

    /// CSS file replacing the default stylesheet
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Print the composed HTML instead of the index file location
    #[arg(long)]
    stdout: bool,
}

impl RenderCommand {
    pub fn render(&self) -> PreviewResult<()> {
        let work_dir = self
            .out
            .clone()
            .unwrap_or_else(|| crate::default_work_dir(&self.ebook_path));

        match self.open(&work_dir) {
            Ok(preview) => {
                if self.stdout {
                    println!("{}", preview.document().html());
                } else if let Some(index) = preview.index() {
                    println!("{}", index.display());
                }
                Ok(())
            }
            Err(error) => {
                Self::write_error_page(&work_dir, &error);
                Err(error)
            }
        }
    }

    fn open(&self, work_dir: &Path) -> PreviewResult<Preview> {
        let mut settings = PreviewSettings::builder();

        if let Some(stylesheet) = &self.stylesheet {
            let css = fs::read_to_string(stylesheet).map_err(|source| PreviewError::Io {
                source,
                path: stylesheet.clone(),
            })?;
            settings = settings.stylesheet(css);
        }
        if self.stdout {
            settings = settings.index_file(None);
        }

        Preview::open_with(&self.ebook_path, work_dir, settings)
    }

    /// Leaves a readable page behind rather than a blank view.
    fn write_error_page(work_dir: &Path, error: &PreviewError) {
        let path = work_dir.join("error.html");

        match fs::create_dir_all(work_dir)
            .and_then(|_| fs::write(&path, epub_preview::error_page(error)))
        {
            Ok(()) => info!(page = %path.display(), "Wrote error page"),
            Err(err) => warn!(page = %path.display(), "Failed to write error page: {err}"),
        }
    }
}
