use std::time::Duration;

use crossterm::event::{self, Event};

use crate::app::App;
use crate::audio::Playback;
use crate::config::UiSettings;
use crate::ui::{self, ScreenLayout};

use super::input::{action_for_key, action_for_mouse};
use super::terminal::Tui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main terminal event loop: draws, reads input and applies actions until
/// the user quits. Events are handled one at a time on this thread.
pub fn run(
    terminal: &mut Tui,
    ui_settings: &UiSettings,
    app: &mut App,
    playback: &dyn Playback,
) -> std::io::Result<()> {
    let mut layout: Option<ScreenLayout> = None;

    loop {
        terminal.draw(|f| layout = Some(ui::draw(f, app, ui_settings)))?;

        // The poll timeout doubles as the refresh rate for the
        // now-playing indicator.
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => layout
                .as_ref()
                .and_then(|l| action_for_mouse(mouse, l)),
            _ => None,
        };

        if let Some(action) = action {
            tracing::trace!(?action, "action");
            if !app.apply(action, playback) {
                return Ok(());
            }
        }
    }
}
