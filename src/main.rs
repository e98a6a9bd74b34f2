use std::process::ExitCode;

mod app;
mod audio;
mod board;
mod cli;
mod config;
mod error;
mod library;
mod runtime;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gachiboard: {e}");
            ExitCode::FAILURE
        }
    }
}
