//! Interactive two-player game loop.
//!
//! A [`Session`] alternates turns between Black and White, starting with
//! Black, and feeds moves to the [`Board`]. Two consecutive passes end the
//! game. A rejected move is reported and the same player moves again.
//!
//! ## Input
//!
//! - `<row> <col>` - place a stone (extra tokens are ignored)
//! - `pass` - pass the turn (case-insensitive)

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::board::{Board, BoardError, Color, MoveError};
use crate::constants::{INVALID_INPUT, INVALID_TURN, PROMPT};

/// What to print once both players have passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The final board
    Board,
    /// `black white` totals of captures plus territory
    Score,
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Move(usize, usize),
    Pass,
}

impl Input {
    /// Parse a line, returning `None` if it is neither a move nor a pass.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("pass") {
            return Some(Input::Pass);
        }
        let mut tokens = line.split_whitespace();
        let row = tokens.next()?.parse().ok()?;
        let col = tokens.next()?.parse().ok()?;
        Some(Input::Move(row, col))
    }
}

/// Result of a successful turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The game goes on with the other player
    Continue,
    /// Second consecutive pass
    Finished,
}

/// How [`Session::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Both players passed; carries the final `(black, white)` score.
    Finished { black: u32, white: u32 },
    /// Input ran out before the game ended.
    Abandoned,
}

/// Game state around a board: whose turn it is and whether the last turn
/// was a pass.
pub struct Session {
    board: Board,
    mode: Mode,
    to_move: Color,
    passed: bool,
    show_indices: bool,
}

impl Session {
    pub fn new(size: usize, mode: Mode) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            mode,
            to_move: Color::Black,
            passed: false,
            show_indices: false,
        })
    }

    /// Decorate printed boards with row and column numbers.
    pub fn show_indices(mut self, show: bool) -> Self {
        self.show_indices = show;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Apply one input for the player to move.
    ///
    /// On error the board and the player to move are unchanged.
    pub fn play(&mut self, input: Input) -> Result<Turn, MoveError> {
        match input {
            Input::Move(row, col) => {
                let captured = self.board.occupy(row, col, self.to_move)?;
                debug!("{} plays ({row}, {col}), captures {captured}", self.to_move);
                self.passed = false;
            }
            Input::Pass => {
                if self.passed {
                    debug!("{} passes, game over", self.to_move);
                    return Ok(Turn::Finished);
                }
                debug!("{} passes", self.to_move);
                self.passed = true;
            }
        }
        self.to_move = self.to_move.opponent();
        Ok(Turn::Continue)
    }

    /// `(black, white)` totals: captured stones plus territory.
    pub fn score(&self) -> (u32, u32) {
        let (black_territory, white_territory) = self.board.count_territories();
        (
            self.board.black_captures() + black_territory,
            self.board.white_captures() + white_territory,
        )
    }

    fn print_board(&self, out: &mut impl Write) -> Result<()> {
        if self.show_indices {
            write!(out, "{}", self.board.with_indices())?;
        } else {
            write!(out, "{}", self.board)?;
        }
        Ok(())
    }

    /// Run the game loop until both players pass or `input` runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<Outcome> {
        self.print_board(&mut out)?;
        let mut lines = input.lines();

        loop {
            writeln!(out, "Current turn: {}", self.to_move)?;
            write!(out, "{PROMPT}")?;
            out.flush().context("failed to flush prompt")?;

            let Some(line) = lines.next() else {
                warn!("input ended before both players passed");
                return Ok(Outcome::Abandoned);
            };
            let line = line.context("failed to read move")?;

            let Some(parsed) = Input::parse(&line) else {
                writeln!(out, "{INVALID_INPUT}")?;
                continue;
            };

            match self.play(parsed) {
                Ok(Turn::Continue) => self.print_board(&mut out)?,
                Ok(Turn::Finished) => {
                    let (black, white) = self.score();
                    info!("game over: black {black}, white {white}");
                    match self.mode {
                        Mode::Score => writeln!(out, "{black} {white}")?,
                        Mode::Board => self.print_board(&mut out)?,
                    }
                    out.flush()?;
                    return Ok(Outcome::Finished { black, white });
                }
                Err(err @ MoveError::OutOfBounds { .. }) => {
                    debug!("rejected: {err}");
                    writeln!(out, "{INVALID_TURN}")?;
                }
                Err(err) => {
                    debug!("rejected: {err}");
                    writeln!(out, "{err}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("1 2"), Some(Input::Move(1, 2)));
        assert_eq!(Input::parse("  3   4 extra\n"), Some(Input::Move(3, 4)));
        assert_eq!(Input::parse("pass"), Some(Input::Pass));
        assert_eq!(Input::parse("PaSs"), Some(Input::Pass));
        assert_eq!(Input::parse("1"), None);
        assert_eq!(Input::parse("-1 2"), None);
        assert_eq!(Input::parse("a b"), None);
        assert_eq!(Input::parse(""), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = Session::new(3, Mode::Board).unwrap();
        assert_eq!(session.to_move(), Color::Black);
        assert_eq!(session.play(Input::Move(0, 0)), Ok(Turn::Continue));
        assert_eq!(session.to_move(), Color::White);
        assert_eq!(session.board().get(0, 0), Some(Color::Black));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = Session::new(3, Mode::Board).unwrap();
        session.play(Input::Move(0, 0)).unwrap();
        assert_eq!(session.play(Input::Move(0, 0)), Err(MoveError::CellOccupied));
        assert_eq!(session.to_move(), Color::White);
    }

    #[test]
    fn test_double_pass_finishes() {
        let mut session = Session::new(3, Mode::Score).unwrap();
        assert_eq!(session.play(Input::Pass), Ok(Turn::Continue));
        assert_eq!(session.play(Input::Pass), Ok(Turn::Finished));
    }

    #[test]
    fn test_move_between_passes_resets() {
        let mut session = Session::new(3, Mode::Score).unwrap();
        session.play(Input::Pass).unwrap();
        session.play(Input::Move(1, 1)).unwrap();
        assert_eq!(session.play(Input::Pass), Ok(Turn::Continue));
        assert_eq!(session.play(Input::Pass), Ok(Turn::Finished));
    }

    #[test]
    fn test_score_adds_captures_and_territory() {
        let mut session = Session::new(3, Mode::Score).unwrap();
        // B(1,0) W(0,0) B(0,1) captures the corner stone
        for input in [Input::Move(1, 0), Input::Move(0, 0), Input::Move(0, 1)] {
            session.play(input).unwrap();
        }
        assert_eq!(session.board().black_captures(), 1);
        // Only black stones on the board: all 7 empty points are black's
        assert_eq!(session.score(), (8, 0));
    }
}
