//! UI rendering helpers for the terminal user interface.
//!
//! The board is drawn the way the touch screen showed it: selector on top,
//! a 2x3 grid of buttons, and Previous/Next at the bottom.

mod layout;

pub use layout::{Hit, ScreenLayout};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;

/// Render the entire UI into `frame` and return the layout used, for
/// mouse hit-testing.
pub fn draw(frame: &mut Frame, app: &App, ui: &UiSettings) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area(), ui);
    let boards = &app.boards;

    // Outer frame. A terminal cannot paint the JPEG, so a board with a
    // background gets a double border and the file name instead.
    let mut outer = Block::bordered()
        .title(format!(" {} ", app.title))
        .title_alignment(Alignment::Center);
    if let Some(bg) = boards.current_background() {
        let name = bg
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        outer = outer
            .border_type(BorderType::Double)
            .title_bottom(Line::from(format!(" {name} ")).right_aligned());
    }
    if let Some(label) = app.now_playing() {
        outer = outer.title_bottom(Line::from(format!(" > {label} ")).left_aligned());
    }
    frame.render_widget(Clear, layout.frame);
    frame.render_widget(outer, layout.frame);

    // Board selector
    let keys = boards.list_board_keys();
    let selector = Paragraph::new(format!("< {} >", boards.cursor().board_key()))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(format!(
                    " board {}/{} ",
                    boards.current_board_index() + 1,
                    keys.len()
                ))
                .title(
                    Line::from(format!(
                        " page {}/{} ",
                        boards.current_page() + 1,
                        boards.page_count().max(1)
                    ))
                    .right_aligned(),
                ),
        );
    frame.render_widget(selector, layout.selector);

    // Buttons; slots past the end of the page stay hidden.
    for (slot, sound) in boards.visible_sounds().iter().enumerate() {
        let area = layout.buttons[slot];
        frame.render_widget(button(&sound.label, area, slot == app.focus), area);
    }

    frame.render_widget(
        nav_button("Previous", boards.has_previous_page()),
        layout.previous,
    );
    frame.render_widget(nav_button("Next", boards.has_next_page()), layout.next);

    layout
}

fn button(label: &str, area: Rect, focused: bool) -> Paragraph<'_> {
    // Label lines are roughly centered vertically.
    let top = area.height.saturating_sub(3) / 2;
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::top(top));
    if focused {
        block = block
            .border_type(BorderType::Thick)
            .style(Style::default().add_modifier(Modifier::REVERSED));
    }
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
}

fn nav_button(text: &str, enabled: bool) -> Paragraph<'_> {
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    if enabled { p.bold() } else { p.dim() }
}
