use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which
                // would scribble over the TUI.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                tracing::error!("no audio output device, clips will not play: {e}");
                None
            }
        };

        let mut sink: Option<Sink> = None;

        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCmd::Play(path)) => {
                    stop(&mut sink, &playback_info);
                    if let Some(stream) = stream.as_ref() {
                        sink = start(stream, &path, &playback_info);
                    }
                }
                Ok(AudioCmd::Stop) => stop(&mut sink, &playback_info),
                Ok(AudioCmd::Quit) => {
                    stop(&mut sink, &playback_info);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    // Clip ran out on its own.
                    if sink.as_ref().is_some_and(Sink::empty) {
                        stop(&mut sink, &playback_info);
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        tracing::debug!("audio thread finished");
    })
}

fn start(stream: &OutputStream, path: &Path, playback_info: &PlaybackHandle) -> Option<Sink> {
    match create_sink(stream, path) {
        Ok(sink) => {
            sink.play();
            tracing::debug!(path = %path.display(), "playing clip");
            set_info(
                playback_info,
                PlaybackInfo {
                    path: Some(path.to_path_buf()),
                    playing: true,
                },
            );
            Some(sink)
        }
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    }
}

fn stop(sink: &mut Option<Sink>, playback_info: &PlaybackHandle) {
    if let Some(s) = sink.take() {
        s.stop();
    }
    set_info(playback_info, PlaybackInfo::default());
}

fn set_info(playback_info: &PlaybackHandle, value: PlaybackInfo) {
    if let Ok(mut info) = playback_info.lock() {
        *info = value;
    }
}
