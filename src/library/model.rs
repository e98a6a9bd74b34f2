use std::ops::Index;
use std::path::{Path, PathBuf};

/// One playable clip: the button label and the file behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    pub label: String,
    pub path: PathBuf,
}

/// A folder of clips, keyed by its path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub key: String,
    pub sounds: Vec<SoundEntry>,
    pub background: Option<PathBuf>,
}

impl Board {
    pub fn background(&self) -> Option<&Path> {
        self.background.as_deref()
    }
}

/// Boards in directory-walk discovery order. Built once at startup and
/// read-only afterwards; every board holds at least one sound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSet {
    boards: Vec<Board>,
}

impl BoardSet {
    /// Build a set from boards in discovery order. Boards without sounds
    /// are dropped.
    pub fn new(boards: impl IntoIterator<Item = Board>) -> Self {
        Self {
            boards: boards.into_iter().filter(|b| !b.sounds.is_empty()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.boards.iter().map(|b| b.key.as_str())
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.boards.iter().position(|b| b.key == key)
    }

    pub fn first(&self) -> Option<&Board> {
        self.boards.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// The first board whose sounds include `path`.
    pub fn find_sound(&self, path: &Path) -> Option<&SoundEntry> {
        self.boards
            .iter()
            .flat_map(|b| b.sounds.iter())
            .find(|s| s.path == path)
    }
}

impl Index<usize> for BoardSet {
    type Output = Board;

    fn index(&self, index: usize) -> &Board {
        &self.boards[index]
    }
}
