use clap::Args;
use epub_preview::errors::PreviewResult;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SpineCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Directory to extract into (defaults to a new temporary directory)
    #[arg(long)]
    out: Option<PathBuf>,
}

impl SpineCommand {
    pub fn spine(&self) -> PreviewResult<()> {
        let work_dir = self
            .out
            .clone()
            .unwrap_or_else(|| crate::default_work_dir(&self.ebook_path));
        let root = epub_preview::extract(&self.ebook_path, work_dir)?;
        let package = epub_preview::resolve_package(root)?;

        println!("base: {}", package.base_folder().display());
        for (index, chapter) in package.chapters().iter().enumerate() {
            println!("ch{index}: {}", chapter.display());
        }
        Ok(())
    }
}
