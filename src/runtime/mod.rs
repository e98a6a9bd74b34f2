use clap::Parser;

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::cli::Cli;
use crate::error::Result;

mod event_loop;
mod input;
mod logging;
mod settings;
mod startup;
mod terminal;

/// Scan, set up the terminal, run the board until quit, restore the
/// terminal. Startup failures come back as errors before the terminal is
/// touched; later failures are returned after it has been restored.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let (mut settings, config_warning) = settings::load_settings();
    cli.apply(&mut settings);

    let log_path = logging::init(&settings.log);
    if let Some(w) = config_warning {
        tracing::warn!("{w}");
    }
    tracing::info!(
        root = %settings.library.root_dir.display(),
        log = ?log_path,
        fullscreen = settings.ui.fullscreen,
        "gachiboard starting"
    );

    let mut controller = startup::load_boards(&settings.library)?;
    if let Some(board) = &cli.board {
        startup::select_start_board(&mut controller, board)?;
    }

    let mouse = settings.ui.mouse;
    terminal::install_panic_hook(mouse);
    let (guard, mut terminal) = terminal::enter(mouse)?;

    let audio_player = AudioPlayer::new();
    let mut app = App::new(controller, &settings);
    app.set_playback_handle(audio_player.playback_handle());

    let run_result = event_loop::run(&mut terminal, &settings.ui, &mut app, &audio_player);

    drop(terminal);
    drop(guard);
    audio_player.quit();
    tracing::info!("gachiboard stopped");

    run_result?;
    Ok(())
}
