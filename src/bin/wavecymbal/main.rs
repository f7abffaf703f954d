//! wavecymbal - play the cymbal model from the terminal
//!
//! Run with: cargo run --release

mod app;
mod ui;

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};

const LOG_FILE: &str = "wavecymbal.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;

    // The terminal belongs to the UI, so logs go to a file.
    let log = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {}", LOG_FILE))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    app::run()
}
