//! Logging init: file under the XDG state dir, or stderr fallback.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,outlink=debug"))
}

/// Initialize structured logging.
///
/// Prefers `~/.local/state/outlink/outlink.log`; when the state dir or
/// log file cannot be opened (read-only home, missing XDG vars), logs go
/// to stderr instead so the CLI still runs.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            init_with_writer(BoxMakeWriter::new(Mutex::new(file)));
            tracing::info!("outlink logging initialized at {}", path.display());
        }
        Err(_) => init_with_writer(BoxMakeWriter::new(io::stderr)),
    }
}

fn init_with_writer(writer: BoxMakeWriter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("outlink")?;
    let path = xdg_dirs.place_state_file("outlink.log")?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
