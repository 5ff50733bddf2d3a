//! Terminal Tetris runner (default binary).
//!
//! Full-screen crossterm UI by default, a line prompt with `--text`.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use term_tetris::cli::Args;
use term_tetris::engine::{run, Session};
use term_tetris::host::{TerminalHost, TextHost};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.board_config().context("invalid board size")?;
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::with_entropy(config),
    };

    if args.text {
        println!(
            "[tetris] text mode: board {}x{}, seed {}",
            config.height(),
            config.width(),
            args.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
        );
        let mut host = TextHost::new(io::stdin().lock(), io::stdout());
        run(&mut session, &mut host)?;
    } else {
        let mut host = TerminalHost::new();
        host.enter()?;
        let result = run(&mut session, &mut host);
        // Always try to restore terminal state.
        let _ = host.exit();
        result?;
    }

    println!(
        "[tetris] session over: score {} lines {} level {} pieces {}",
        session.score(),
        session.lines(),
        session.level(),
        session.statistics().total()
    );
    Ok(())
}
