//! Glyphs and fixed parameters shared by the engine and the shell.

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Black stone.
pub const BLACK_GLYPH: char = 'X';

/// White stone.
pub const WHITE_GLYPH: char = 'O';

/// Empty point.
pub const EMPTY_GLYPH: char = '.';

// =============================================================================
// Position Fingerprints
// =============================================================================

/// Seed for the Zobrist key generator.
///
/// Keys only index the position history, so a fixed seed keeps fingerprints
/// reproducible between runs without affecting ko semantics.
pub const ZOBRIST_SEED: u64 = 0x1234_5678_9ABC_DEF0;

// =============================================================================
// Shell Messages
// =============================================================================

/// Prompt printed before reading a move.
pub const PROMPT: &str = "Enter two numbers (row column): ";

/// Printed when a line is neither a move nor a pass.
pub const INVALID_INPUT: &str = "Invalid input! Try again!";

/// Printed when a move lands outside the board.
pub const INVALID_TURN: &str = "Invalid turn! Try again!";
