mod collision;
mod config;
mod controls;
mod error;
mod food;
mod game;
mod grid;
mod render;
mod session;
mod snake;
mod term;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::{Args, Settings};
use crate::session::Session;
use crate::term::TermManager;

fn main() -> anyhow::Result<()> {
    // Quiet unless RUST_LOG is set; redirect stderr to keep it off the board
    env_logger::init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(Settings::from(&args), rng);

    let mut term = TermManager::new().context("reading terminal size")?;
    if let Err(e) = term.setup() {
        let _ = term.restore();
        return Err(e).context("preparing the terminal");
    }

    // The terminal is handed back before any error is reported
    let result = session.run(&mut term);
    term.restore().context("restoring the terminal")?;
    let summary = result.context("running the game")?;

    info!(
        "played {} game(s), last score {}{}",
        summary.games,
        summary.last_score,
        if summary.won { ", won" } else { "" }
    );
    Ok(())
}
