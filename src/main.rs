use std::{io, path::PathBuf};

use anyhow::Context;
use room_booking::{BookingConfig, BookingRegistry, Console};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, the menu owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("room_booking=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => BookingConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BookingConfig::default(),
    };
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), BookingRegistry::new(config));
    console.run()?;

    Ok(())
}
