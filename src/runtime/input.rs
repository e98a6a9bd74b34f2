//! Terminal events to app actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::Action;
use crate::ui::{Hit, ScreenLayout};

/// Map a key press to an action. Releases and repeats are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Char('b') => Action::NextBoard,
        KeyCode::BackTab | KeyCode::Char('B') => Action::PreviousBoard,
        KeyCode::Char('l' | 'n' | ']') | KeyCode::PageDown => Action::NextPage,
        KeyCode::Char('h' | 'p' | '[') | KeyCode::PageUp => Action::PreviousPage,
        KeyCode::Char('k') | KeyCode::Up => Action::FocusUp,
        KeyCode::Char('j') | KeyCode::Down => Action::FocusDown,
        KeyCode::Left => Action::FocusLeft,
        KeyCode::Right => Action::FocusRight,
        KeyCode::Enter | KeyCode::Char(' ') => Action::PressFocused,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Char(c @ '1'..='6') => Action::PressSlot(c as usize - '1' as usize),
        _ => return None,
    };
    Some(action)
}

/// Map a left click (or tap) to an action via the last drawn layout.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let action = match layout.hit_test(mouse.column, mouse.row)? {
        Hit::Selector { left_half: true } => Action::PreviousBoard,
        Hit::Selector { left_half: false } => Action::NextBoard,
        Hit::Button(slot) => Action::PressSlot(slot),
        Hit::Previous => Action::PreviousPage,
        Hit::Next => Action::NextPage,
    };
    Some(action)
}
