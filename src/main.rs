//! Two-player Go in the terminal.
//!
//! ## Usage
//!
//! - `go-game <SIZE> --board` - print the final board after both players pass
//! - `go-game <SIZE> --score` - print `black white` scores after both players pass
//!
//! Moves are read from stdin as `row column`, or `pass`.

use std::io;

use anyhow::Result;
use clap::{Args, Parser};

use go_rules::game::{Mode, Session};

/// Two-player Go with capture, suicide and ko rules
#[derive(Parser)]
#[command(name = "go-game")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (the board is SIZE x SIZE)
    #[arg(value_parser = parse_size)]
    size: usize,

    #[command(flatten)]
    mode: ModeArgs,

    /// Print row and column numbers around the board
    #[arg(long)]
    indices: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ModeArgs {
    /// Print the final board when the game ends
    #[arg(long)]
    board: bool,
    /// Print the final `black white` score when the game ends
    #[arg(long)]
    score: bool,
}

impl ModeArgs {
    fn mode(&self) -> Mode {
        if self.score { Mode::Score } else { Mode::Board }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("the size of the board cannot be 0".to_string()),
        Ok(size) => Ok(size),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut session = Session::new(cli.size, cli.mode.mode())?.show_indices(cli.indices);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
