use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Touch-friendly terminal soundboard.
#[derive(Debug, Parser)]
#[command(name = "gachiboard", version, about)]
pub struct Cli {
    /// Directory holding one sub-folder per board (overrides `library.root_dir`).
    pub root_dir: Option<PathBuf>,

    /// Launch using the whole terminal instead of a fixed-size window.
    #[arg(long)]
    pub fullscreen: bool,

    /// Board to start on: its key, or `#N` for the N-th board.
    #[arg(long, value_name = "KEY")]
    pub board: Option<String>,
}

impl Cli {
    /// Fold command-line overrides into loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.root_dir {
            settings.library.root_dir = dir.clone();
        }
        if self.fullscreen {
            settings.ui.fullscreen = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_dir_and_fullscreen() {
        let cli = Cli::try_parse_from(["gachiboard", "/srv/sounds", "--fullscreen"]).unwrap();
        let mut s = Settings::default();
        cli.apply(&mut s);
        assert_eq!(s.library.root_dir, PathBuf::from("/srv/sounds"));
        assert!(s.ui.fullscreen);
        assert_eq!(cli.board, None);
    }

    #[test]
    fn parses_start_board() {
        let cli = Cli::try_parse_from(["gachiboard", "--board", "memes/old"]).unwrap();
        assert_eq!(cli.board.as_deref(), Some("memes/old"));
        assert_eq!(cli.root_dir, None);
    }

    #[test]
    fn no_arguments_keep_settings() {
        let cli = Cli::try_parse_from(["gachiboard"]).unwrap();
        let mut s = Settings::default();
        s.ui.fullscreen = true;
        cli.apply(&mut s);
        assert_eq!(s.library.root_dir, PathBuf::from("sounds"));
        assert!(s.ui.fullscreen);
    }
}
