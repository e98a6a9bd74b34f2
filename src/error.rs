//! Error taxonomy for startup and board selection.
//!
//! Only startup failures are fatal. A sound lookup that finds nothing is not
//! an error and is reported as `None` by the board controller.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The scan finished without a single folder holding audio files.
    #[error(
        "no sounds loaded from {}: make sure it has sub-folders with .wav or .mp3 files in them",
        .root.display()
    )]
    NoBoards { root: PathBuf },

    /// The configured sound directory is missing or is not a directory.
    #[error("sound directory {} does not exist or is not a directory", .root.display())]
    RootNotFound { root: PathBuf },

    /// A board key that is not part of the indexed set.
    #[error("unknown board {0:?}")]
    UnknownBoard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
