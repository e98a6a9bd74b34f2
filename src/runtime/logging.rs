use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// Send `tracing` output to the log file; stdout belongs to the TUI.
///
/// `RUST_LOG` overrides the configured level. Returns the log path, or
/// `None` when no file could be opened and logging stays off.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(config::default_log_path)?;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("gachiboard: logging disabled, cannot create {}: {e}", parent.display());
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("gachiboard: logging disabled, cannot open {}: {e}", path.display());
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init();

    Some(path)
}
