use std::path::Path;

use crate::error::{Error, Result};
use crate::library::{Board, BoardSet, SoundEntry};

use super::cursor::Cursor;

/// Number of buttons on one page.
pub const PAGE_SIZE: usize = 6;

/// Holds the indexed boards and the cursor, and answers everything the
/// presentation layer needs to render a page.
#[derive(Debug, Clone)]
pub struct BoardController {
    boards: BoardSet,
    cursor: Cursor,
}

impl BoardController {
    /// Start on the first board, page 0. Returns `None` for an empty set,
    /// there is nothing to show.
    pub fn new(boards: BoardSet) -> Option<Self> {
        let first = boards.first()?.key.clone();
        Some(Self {
            boards,
            cursor: Cursor::new(0, first),
        })
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Board keys in discovery order, for the selector.
    pub fn list_board_keys(&self) -> Vec<&str> {
        self.boards.keys().collect()
    }

    /// Switch boards and go back to the first page. When several boards
    /// render to the same key the first one is selected; use
    /// `select_board_at` to reach the others.
    pub fn select_board(&mut self, key: &str) -> Result<()> {
        let index = self
            .boards
            .position(key)
            .ok_or_else(|| Error::UnknownBoard(key.to_string()))?;
        self.select_index(index);
        Ok(())
    }

    pub fn select_board_at(&mut self, index: usize) -> Result<()> {
        if index >= self.boards.len() {
            return Err(Error::UnknownBoard(format!("#{}", index + 1)));
        }
        self.select_index(index);
        Ok(())
    }

    /// Position of the current board in `list_board_keys`.
    pub fn current_board_index(&self) -> usize {
        self.cursor.board()
    }

    /// Select the following board, wrapping to the first.
    pub fn next_board(&mut self) {
        let next = (self.cursor.board() + 1) % self.boards.len();
        self.select_index(next);
    }

    /// Select the preceding board, wrapping to the last.
    pub fn previous_board(&mut self) {
        let len = self.boards.len();
        let prev = (self.cursor.board() + len - 1) % len;
        self.select_index(prev);
    }

    pub fn current_board(&self) -> &Board {
        // The cursor only holds positions checked against `boards`, and
        // `boards` never changes after construction.
        &self.boards[self.cursor.board()]
    }

    /// `index` must be in range.
    fn select_index(&mut self, index: usize) {
        let key = self.boards[index].key.clone();
        self.cursor.select(index, key);
    }

    pub fn current_page(&self) -> usize {
        self.cursor.page()
    }

    /// `ceil(N / PAGE_SIZE)` for the current board.
    pub fn page_count(&self) -> usize {
        self.total_sounds().div_ceil(PAGE_SIZE)
    }

    pub fn current_background(&self) -> Option<&Path> {
        self.current_board().background()
    }

    /// The sounds on the current page, at most `PAGE_SIZE`.
    pub fn visible_sounds(&self) -> &[SoundEntry] {
        let sounds = &self.current_board().sounds;
        let start = (self.cursor.page() * PAGE_SIZE).min(sounds.len());
        let end = (start + PAGE_SIZE).min(sounds.len());
        &sounds[start..end]
    }

    pub fn has_next_page(&self) -> bool {
        (self.cursor.page() + 1) * PAGE_SIZE < self.total_sounds()
    }

    pub fn has_previous_page(&self) -> bool {
        self.cursor.page() > 0
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.cursor.set_page(self.cursor.page() + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.cursor.set_page(self.cursor.page() - 1);
        }
    }

    /// Index-keyed lookup of a button on the current page.
    pub fn sound_at_slot(&self, slot: usize) -> Option<&SoundEntry> {
        self.visible_sounds().get(slot)
    }

    /// Label-keyed lookup over the whole current board, first match wins.
    /// A later sound sharing the label cannot be reached this way.
    pub fn resolve_sound(&self, label: &str) -> Option<&Path> {
        self.current_board()
            .sounds
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.path.as_path())
    }

    /// The entry behind an absolute sound path, searching every board.
    pub fn find_sound(&self, path: &Path) -> Option<&SoundEntry> {
        self.boards.find_sound(path)
    }

    fn total_sounds(&self) -> usize {
        self.current_board().sounds.len()
    }
}
