use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/gachiboard/config.toml` or `~/.config/gachiboard/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `GACHIBOARD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned for boards. Every folder below it holding audio
    /// files becomes one board.
    pub root_dir: PathBuf,
    /// File name suffixes treated as audio. Matched case-sensitively,
    /// so `clip.WAV` is not picked up by the default `.wav`.
    pub audio_suffixes: Vec<String>,
    /// File name used as a board's background image. Matched
    /// case-insensitively.
    pub background_file: String,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Optional cap on directory recursion depth (root = 0).
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("sounds"),
            audio_suffixes: vec![".wav".into(), ".mp3".into()],
            background_file: "background.jpg".to_string(),
            follow_links: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title drawn on the outer frame.
    pub title: String,
    /// Use the whole terminal instead of a fixed-size window.
    pub fullscreen: bool,
    /// Window size in cells when not fullscreen.
    pub window_width: u16,
    pub window_height: u16,
    /// Capture mouse events so clicks/taps press buttons.
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: "Gachiboard".to_string(),
            fullscreen: false,
            // Roughly the 320x480 portrait of a 3.5" touch display.
            window_width: 36,
            window_height: 26,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Resolve button presses by label instead of by slot. With duplicate
    /// labels on a board only the first one is reachable.
    pub label_lookup: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file. Defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
