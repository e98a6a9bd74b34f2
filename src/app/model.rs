//! Application model: the board controller plus keyboard focus and
//! display flags.

use std::path::Path;

use crate::audio::{Playback, PlaybackHandle};
use crate::board::{BoardController, PAGE_SIZE};
use crate::config::Settings;

use super::action::Action;

/// Buttons per grid row.
pub const GRID_COLUMNS: usize = 2;

/// The main application model.
pub struct App {
    pub boards: BoardController,
    /// Keyboard-focused slot on the current page.
    pub focus: usize,
    pub title: String,
    /// Resolve presses by label rather than by slot.
    pub label_lookup: bool,
    pub playback_handle: Option<PlaybackHandle>,
}

impl App {
    pub fn new(boards: BoardController, settings: &Settings) -> Self {
        Self {
            boards,
            focus: 0,
            title: settings.ui.title.clone(),
            label_lookup: settings.playback.label_lookup,
            playback_handle: None,
        }
    }

    /// Attach a `PlaybackHandle` used to show what is playing.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Apply one user action. Returns `false` once the app should quit.
    pub fn apply(&mut self, action: Action, playback: &dyn Playback) -> bool {
        match action {
            Action::NextBoard => self.boards.next_board(),
            Action::PreviousBoard => self.boards.previous_board(),
            Action::NextPage => self.boards.next_page(),
            Action::PreviousPage => self.boards.previous_page(),
            Action::FocusUp => self.move_focus(-(GRID_COLUMNS as isize)),
            Action::FocusDown => self.move_focus(GRID_COLUMNS as isize),
            Action::FocusLeft => self.move_focus(-1),
            Action::FocusRight => self.move_focus(1),
            Action::PressFocused => self.press(self.focus, playback),
            Action::PressSlot(slot) => {
                if slot < self.visible_count() {
                    self.focus = slot;
                }
                self.press(slot, playback);
            }
            Action::Stop => playback.stop(),
            Action::Quit => {
                playback.stop();
                return false;
            }
        }
        self.clamp_focus();
        true
    }

    /// Play the sound behind `slot`. Empty slots and lookup misses do
    /// nothing.
    pub fn press(&mut self, slot: usize, playback: &dyn Playback) {
        let Some(entry) = self.boards.sound_at_slot(slot) else {
            tracing::debug!(slot, "press on empty slot");
            return;
        };
        let label = entry.label.clone();

        let path: Option<&Path> = if self.label_lookup {
            self.boards.resolve_sound(&label)
        } else {
            Some(entry.path.as_path())
        };

        match path {
            Some(path) => {
                tracing::info!(board = %self.boards.cursor().board_key(), %label, "press");
                playback.play(path);
            }
            None => tracing::debug!(%label, "no sound for label"),
        }
    }

    /// Number of buttons shown on the current page.
    pub fn visible_count(&self) -> usize {
        self.boards.visible_sounds().len()
    }

    /// Label of the clip still sounding, if any. Clips outside the board
    /// set show their file name.
    pub fn now_playing(&self) -> Option<String> {
        let info = self.playback_handle.as_ref()?.lock().ok()?;
        if !info.playing {
            return None;
        }
        let path = info.path.as_deref()?;
        match self.boards.find_sound(path) {
            Some(entry) => Some(entry.label.clone()),
            None => path.file_name().map(|n| n.to_string_lossy().into_owned()),
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        let target = self.focus as isize + delta;
        if (0..count as isize).contains(&target) {
            self.focus = target as usize;
        }
    }

    fn clamp_focus(&mut self) {
        let count = self.visible_count().min(PAGE_SIZE);
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }
}
