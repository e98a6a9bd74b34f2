//! Audio subsystem: public API and module wiring.
//!
//! A single background thread owns the output stream and at most one
//! `Sink`. Starting a clip replaces whatever was playing.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::*;

#[cfg(test)]
mod tests;
