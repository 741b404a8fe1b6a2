use clap::Subcommand;

mod render;
mod spine;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Flatten an EPUB into a single HTML document.
    Render(render::RenderCommand),
    /// Print the resolved chapter documents in reading order.
    Spine(spine::SpineCommand),
}
