//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

use crate::app::GRID_COLUMNS;
use crate::board::PAGE_SIZE;
use crate::config::UiSettings;

const SELECTOR_HEIGHT: u16 = 3;
const NAV_HEIGHT: u16 = 3;
const MIN_BUTTON_HEIGHT: u16 = 3;
const MAX_BUTTON_HEIGHT: u16 = 5;
const GRID_ROWS: usize = PAGE_SIZE / GRID_COLUMNS;

/// Where everything goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The outer frame (whole terminal when fullscreen).
    pub frame: Rect,
    pub selector: Rect,
    /// Slot `i` sits at row `i / 2`, column `i % 2`.
    pub buttons: [Rect; PAGE_SIZE],
    pub previous: Rect,
    pub next: Rect,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Selector { left_half: bool },
    Button(usize),
    Previous,
    Next,
}

impl ScreenLayout {
    pub fn compute(area: Rect, ui: &UiSettings) -> Self {
        let frame = if ui.fullscreen {
            area
        } else {
            centered_rect_sized(ui.window_width, ui.window_height, area)
        };
        let inner = frame.inner(Margin::new(1, 1));

        let button_height = (inner.height.saturating_sub(SELECTOR_HEIGHT + NAV_HEIGHT)
            / GRID_ROWS as u16)
            .clamp(MIN_BUTTON_HEIGHT, MAX_BUTTON_HEIGHT);

        // Spacers above and below the grid keep it vertically centered.
        let [selector, _, grid, _, nav] = Layout::vertical([
            Constraint::Length(SELECTOR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(button_height * GRID_ROWS as u16),
            Constraint::Min(0),
            Constraint::Length(NAV_HEIGHT),
        ])
        .areas(inner);

        let rows: [Rect; GRID_ROWS] =
            Layout::vertical([Constraint::Length(button_height); GRID_ROWS]).areas(grid);
        let mut buttons = [Rect::default(); PAGE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let cols: [Rect; GRID_COLUMNS] =
                Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .areas(*row);
            for (c, cell) in cols.into_iter().enumerate() {
                buttons[r * GRID_COLUMNS + c] = cell;
            }
        }

        let [previous, next] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(nav);

        Self {
            frame,
            selector,
            buttons,
            previous,
            next,
        }
    }

    /// Map a terminal cell to the control drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.selector.contains(pos) {
            let left_half = column < self.selector.x + self.selector.width / 2;
            return Some(Hit::Selector { left_half });
        }
        if let Some(slot) = self.buttons.iter().position(|b| b.contains(pos)) {
            return Some(Hit::Button(slot));
        }
        if self.previous.contains(pos) {
            return Some(Hit::Previous);
        }
        if self.next.contains(pos) {
            return Some(Hit::Next);
        }
        None
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);

    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
