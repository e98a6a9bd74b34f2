//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and wraps the board controller
//! with the bits of UI state the terminal needs (focus, last press).

mod action;
mod model;

pub use action::Action;
pub use model::*;
