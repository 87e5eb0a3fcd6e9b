use anyhow::Result;
use chrono::Local;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("table-enhancer")
        .join("logs")
}

/// Initialize tracing to a timestamped file. The terminal belongs to
/// the TUI, so nothing may write to stdout/stderr after startup.
///
/// Filtering follows RUST_LOG, defaulting to `info`.
pub fn init_logging() -> Result<PathBuf> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!(
        "table-enhancer-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}
