use std::io::{self, Stdout};

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Step<'a> = (&'static str, Box<dyn FnOnce() -> io::Result<()> + 'a>);

/// Puts the terminal back into cooked mode when dropped, including on an
/// early return or while unwinding from a panic.
pub struct TerminalGuard {
    mouse: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.mouse);
    }
}

/// Raw mode, alternate screen and (optionally) mouse capture. If any step
/// fails, the ones already taken are undone before the error is returned.
pub fn enter(mouse: bool) -> io::Result<(TerminalGuard, Tui)> {
    enable_raw_mode()?;
    let guard = TerminalGuard { mouse };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((guard, terminal))
}

/// Restore the terminal before the default hook prints the panic message,
/// so it lands on the normal screen.
pub fn install_panic_hook(mouse: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(mouse);
        previous(info);
    }));
}

/// Best-effort teardown. Every step runs even if an earlier one fails;
/// failures are logged.
pub fn restore(mouse: bool) {
    let mut steps: Vec<Step<'static>> = Vec::new();
    if mouse {
        steps.push(step("disable mouse capture", || {
            execute!(io::stdout(), DisableMouseCapture)
        }));
    }
    steps.push(step("leave alternate screen", || {
        execute!(io::stdout(), LeaveAlternateScreen)
    }));
    steps.push(step("disable raw mode", disable_raw_mode));
    steps.push(step("show cursor", || execute!(io::stdout(), Show)));
    run_all(steps);
}

fn step<'a>(name: &'static str, f: impl FnOnce() -> io::Result<()> + 'a) -> Step<'a> {
    (name, Box::new(f))
}

/// Returns the number of failed steps.
fn run_all(steps: Vec<Step<'_>>) -> usize {
    let mut failed = 0;
    for (name, f) in steps {
        if let Err(err) = f() {
            tracing::warn!(step = name, "terminal restore failed: {err}");
            failed += 1;
        }
    }
    failed
}
