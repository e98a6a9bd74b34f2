use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::index::{DirListing, MatchRules, index_listings};
use super::model::BoardSet;

/// Walk `root` and collect the files of every directory, directories in
/// pre-order discovery order and files in enumeration order.
///
/// Unreadable entries are skipped.
pub fn walk(root: &Path, settings: &LibrarySettings) -> Vec<DirListing> {
    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    let mut listings: Vec<DirListing> = Vec::new();
    let mut by_dir: HashMap<PathBuf, usize> = HashMap::new();

    for entry in walker.into_iter().filter_map(|e| match e {
        Ok(e) => Some(e),
        Err(err) => {
            tracing::warn!("skipping unreadable entry: {err}");
            None
        }
    }) {
        let path = entry.path();
        if entry.file_type().is_dir() {
            by_dir.insert(path.to_path_buf(), listings.len());
            listings.push(DirListing::new(path));
        } else if path.is_file() {
            let slot = path.parent().and_then(|parent| by_dir.get(parent));
            if let Some(&i) = slot {
                listings[i].files.push(path.to_path_buf());
            }
        }
    }

    listings
}

/// Scan the configured sound directory into a board set.
///
/// The root is made absolute first so every sound path is absolute. An
/// empty result is returned as-is; the caller decides that it is fatal.
pub fn scan(settings: &LibrarySettings) -> Result<BoardSet> {
    let root = std::path::absolute(&settings.root_dir)?;
    if !root.is_dir() {
        return Err(Error::RootNotFound { root });
    }

    let rules = MatchRules::from_settings(settings);
    let listings = walk(&root, settings);
    tracing::debug!(dirs = listings.len(), root = %root.display(), "walked sound directory");

    let boards = index_listings(&root, listings, &rules);
    tracing::info!(
        boards = boards.len(),
        sounds = boards.iter().map(|b| b.sounds.len()).sum::<usize>(),
        "indexed sound directory"
    );
    Ok(boards)
}
