use std::path::PathBuf;

use super::*;

#[test]
fn playback_info_starts_idle() {
    let info = PlaybackInfo::default();
    assert!(!info.playing);
    assert!(info.path.is_none());
}

#[test]
fn open_error_names_the_file() {
    let err = PlaybackError::Open {
        path: PathBuf::from("/r/missing.mp3"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    let msg = err.to_string();
    assert!(msg.contains("missing.mp3"), "{msg}");
    assert!(msg.starts_with("failed to open"), "{msg}");
}
