use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor::Show, execute};
use std::io::stdout;
use std::process::ExitCode;

mod audio;
mod config;
mod error;
mod fireworks;
mod pacing;
mod palette;
mod rng;
mod scenes;
mod session;
mod ui;

use config::Cli;
use pacing::{InterruptiblePacer, StopFlag};
use session::Session;
use ui::Console;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so they never tear the frames on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level().as_str())).init();

    let stop = StopFlag::new();
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || {
        if handler_stop.is_raised() {
            // second Ctrl+C while cleanup is still running: leave right away
            let _ = execute!(stdout(), Show);
            std::process::exit(0);
        }
        handler_stop.raise();
    })
    .context("failed to install the Ctrl+C handler")?;

    let config = cli.config();
    log::debug!("starting with {config:?}");

    let console = Console::stdio(stop.clone());
    let pacer = InterruptiblePacer::new(stop);
    let mut session = Session::new(console, pacer, config);

    let outcome = session.run().context("the show could not be drawn")?;
    log::info!("session ended: {outcome:?}");
    Ok(ExitCode::from(outcome.exit_code()))
}
