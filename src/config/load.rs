use std::{env, path::PathBuf};

use super::schema::Settings;

pub const MIN_WINDOW_WIDTH: u16 = 20;
pub const MIN_WINDOW_HEIGHT: u16 = 16;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `GACHIBOARD__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("GACHIBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .library
            .audio_suffixes
            .iter()
            .all(|s| s.trim().is_empty())
        {
            return Err("library.audio_suffixes must name at least one suffix".to_string());
        }
        if self.library.background_file.trim().is_empty() {
            return Err("library.background_file must not be empty".to_string());
        }
        if self.ui.window_width < MIN_WINDOW_WIDTH || self.ui.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "ui.window_width x ui.window_height must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}"
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `GACHIBOARD_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("GACHIBOARD_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/gachiboard/config.toml`
/// or `~/.config/gachiboard/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("gachiboard").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/gachiboard/gachiboard.log`
/// or `~/.local/state/gachiboard/gachiboard.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state")
        .map(|d| d.join("gachiboard").join("gachiboard.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
