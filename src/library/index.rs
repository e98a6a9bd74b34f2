//! Grouping of walked directories into boards.
//!
//! Indexing only looks at file names, never at file contents, and is a
//! pure function of the listings it is handed. Walk order therefore
//! decides board order and which background wins when a folder has
//! several candidates.

use std::path::{Path, PathBuf};

use crate::config::LibrarySettings;

use super::label::label_from_path;
use super::model::{Board, BoardSet, SoundEntry};

/// The files found directly inside one directory, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl DirListing {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
        }
    }
}

/// How file names are classified while indexing.
#[derive(Debug, Clone)]
pub struct MatchRules {
    audio_suffixes: Vec<String>,
    background_lower: String,
}

impl MatchRules {
    pub fn from_settings(settings: &LibrarySettings) -> Self {
        Self {
            audio_suffixes: settings
                .audio_suffixes
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            background_lower: settings.background_file.trim().to_lowercase(),
        }
    }

    /// Exact-case suffix match.
    pub fn is_audio(&self, name: &str) -> bool {
        self.audio_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    /// Case-insensitive whole-name match.
    pub fn is_background(&self, name: &str) -> bool {
        name.to_lowercase() == self.background_lower
    }
}

/// Key of `dir` relative to `root`; the root itself is `"."`.
pub fn board_key(root: &Path, dir: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => dir.to_string_lossy().into_owned(),
    }
}

/// Classify one directory's files. Returns `None` when the directory holds
/// neither audio nor a background image.
pub fn index_dir(root: &Path, listing: &DirListing, rules: &MatchRules) -> Option<Board> {
    let mut sounds = Vec::new();
    let mut background = None;

    for path in &listing.files {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        if rules.is_audio(&name) {
            sounds.push(SoundEntry {
                label: label_from_path(path),
                path: path.clone(),
            });
        } else if rules.is_background(&name) {
            // Last one wins.
            background = Some(path.clone());
        }
    }

    if sounds.is_empty() && background.is_none() {
        return None;
    }

    Some(Board {
        key: board_key(root, &listing.dir),
        sounds,
        background,
    })
}

/// Build the board set from listings in walk order. Folders with a
/// background but no audio are seen here and then dropped by `BoardSet`.
pub fn index_listings(
    root: &Path,
    listings: impl IntoIterator<Item = DirListing>,
    rules: &MatchRules,
) -> BoardSet {
    let folders: Vec<Board> = listings
        .into_iter()
        .filter_map(|listing| index_dir(root, &listing, rules))
        .collect();

    for folder in folders.iter().filter(|b| b.sounds.is_empty()) {
        tracing::debug!(board = %folder.key, "skipping folder with a background but no sounds");
    }

    BoardSet::new(folders)
}
