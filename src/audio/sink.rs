//! Utilities for creating `rodio` sinks from clip paths.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::types::PlaybackError;

/// Create a paused `Sink` holding the decoded clip at `path`.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Result<Sink, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
