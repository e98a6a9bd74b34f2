//! Sound library: directory scanning and board indexing.
//!
//! The scan runs once at startup. Each folder under the root that holds
//! audio files becomes a `Board`, keyed by its path relative to the root.

mod index;
mod label;
mod model;
mod scan;

pub use model::{Board, BoardSet, SoundEntry};
pub use scan::scan;

#[cfg(test)]
mod tests;
