//! Go-Rules: the rules engine of the board game Go.
//!
//! This crate validates moves, resolves captures, enforces the suicide and
//! ko prohibitions, and counts territory. A small interactive shell drives
//! two-player games in the terminal.
//!
//! ## Modules
//!
//! - [`board`] - Board state, move legality, captures and territory
//! - [`history`] - Zobrist fingerprints and the seen-position set for ko
//! - [`render`] - Text rendering of boards
//! - [`game`] - Turn-taking game loop over any reader and writer
//! - [`constants`] - Glyphs, seeds and shell messages
//!
//! ## Example
//!
//! ```
//! use go_rules::board::{Board, Color, MoveError};
//!
//! let mut board = Board::new(3).unwrap();
//! board.occupy(1, 0, Color::Black).unwrap();
//! board.occupy(0, 0, Color::White).unwrap();
//!
//! // Black takes the corner stone's last liberty
//! assert_eq!(board.occupy(0, 1, Color::Black), Ok(1));
//! assert_eq!(board.get(0, 0), None);
//!
//! // White cannot play back into the surrounded corner
//! assert_eq!(board.occupy(0, 0, Color::White), Err(MoveError::SuicideMove));
//!
//! println!("{board}");
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod history;
pub mod render;
