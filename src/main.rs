//! Deskbox - small desk utilities
//!
//! One binary, six utilities behind a common command dispatcher.

// Use the library crate for all modules
use deskbox::cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Run CLI
    cli::run()
}
