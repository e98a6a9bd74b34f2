//! Audio-related small types and handles.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Something that can play a clip by path. Single voice: `play` replaces
/// the current clip.
pub trait Playback {
    fn play(&self, path: &Path);
    fn stop(&self);
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the file, cutting off the current clip.
    Play(PathBuf),
    /// Stop playback immediately.
    Stop,
    /// Quit the audio thread.
    Quit,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    /// The clip most recently started, if it is still sounding.
    pub path: Option<PathBuf>,
    /// Whether a clip is currently sounding.
    pub playing: bool,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

/// Why a clip could not be started. Logged and dropped by the audio thread.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}
