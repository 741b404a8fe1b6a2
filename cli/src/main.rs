use clap::Parser;
use epub_preview_cli::Cli;
use epub_preview_cli::command::Commands;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.commands {
        Commands::Render(render) => render.render(),
        Commands::Spine(spine) => spine.spine(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr; override the level with `RUST_LOG`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();
}
