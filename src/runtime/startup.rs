use crate::board::BoardController;
use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::library;

/// Scan the sound directory and start on its first board. A library
/// without a single playable clip is a startup error.
pub fn load_boards(settings: &LibrarySettings) -> Result<BoardController> {
    let boards = library::scan(settings)?;
    match BoardController::new(boards) {
        Some(controller) => Ok(controller),
        None => {
            let root = std::path::absolute(&settings.root_dir)?;
            tracing::error!(root = %root.display(), "no boards found");
            Err(Error::NoBoards { root })
        }
    }
}

/// Move to the board named on the command line. `#N` picks the N-th board
/// in selector order, which also reaches boards whose keys collide.
pub fn select_start_board(controller: &mut BoardController, board: &str) -> Result<()> {
    match board.strip_prefix('#').map(str::parse::<usize>) {
        Some(Ok(n)) if n > 0 => controller.select_board_at(n - 1),
        _ => controller.select_board(board),
    }
}
