use crate::phrases::RandomPicker;
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{error, info};

mod config;
mod error;
mod google_chat;
mod logging;
mod notify;
mod phrases;

fn main() -> ExitCode {
    logging::init();

    if let Err(e) = run() {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    info!("Message sent successfully");
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let config = config::get_config().context("Unable to load config")?;

    notify::notify(&config, &mut RandomPicker::clock_seeded())
}
