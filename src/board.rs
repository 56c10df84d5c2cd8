//! Go board: move legality, captures, ko and territory counting.
//!
//! The grid is a flat `size * size` array indexed `row * size + col`.
//! Every move is resolved on a scratch copy of the grid and committed only
//! once it has passed the suicide and ko checks, so a rejected move never
//! leaves a trace on the board.

use thiserror::Error;

use crate::history::{PositionHistory, ZobristTable};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A point on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Error building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("The size of the board cannot be equal to 0!")]
    ZeroSize,
}

/// Reason a move was rejected. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinates outside `[0, size)`
    #[error("The point ({row}, {col}) is outside the {size}x{size} board!")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Point is not empty
    #[error("The cell is already occupied!")]
    CellOccupied,
    /// No capture and no liberties for the placed group
    #[error("This move would result in an unprofitable suicide!")]
    SuicideMove,
    /// Resulting position was already played
    #[error("This move is forbidden by the ko rule!")]
    KoViolation,
}

/// Bare cell storage with the group searches that run on it.
///
/// Kept separate from [`Board`] so a move can be tried on a clone and
/// thrown away on rejection.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        (idx / self.size, idx % self.size)
    }

    /// Orthogonal in-bounds neighbors of a cell index.
    fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + use<> {
        let s = self.size;
        let (row, col) = self.point(idx);
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push(idx - s);
        }
        if row + 1 < s {
            v.push(idx + s);
        }
        if col > 0 {
            v.push(idx - 1);
        }
        if col + 1 < s {
            v.push(idx + 1);
        }
        v.into_iter()
    }

    /// Whether the group containing `start` touches an empty point.
    ///
    /// Returns `false` for an empty `start`; callers only ask about stones.
    fn has_liberty(&self, start: usize) -> bool {
        let Some(color) = self.cells[start] else {
            return false;
        };
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        visited[start] = true;
        while let Some(i) = stack.pop() {
            for n in self.neighbors(i) {
                match self.cells[n] {
                    None => return true,
                    Some(c) if c == color && !visited[n] => {
                        visited[n] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// Empty every stone of the group containing `start`.
    ///
    /// Returns the removed cell indices.
    fn remove_group(&mut self, start: usize) -> Vec<usize> {
        let Some(color) = self.cells[start] else {
            return Vec::new();
        };
        let mut stack = vec![start];
        let mut removed = Vec::new();
        self.cells[start] = None;
        while let Some(i) = stack.pop() {
            removed.push(i);
            for n in self.neighbors(i) {
                if self.cells[n] == Some(color) {
                    self.cells[n] = None;
                    stack.push(n);
                }
            }
        }
        removed
    }
}

/// Who borders an empty region seen so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Border {
    Nobody,
    Only(Color),
    Both,
}

impl Border {
    fn add(self, color: Color) -> Self {
        match self {
            Border::Nobody => Border::Only(color),
            Border::Only(c) if c == color => self,
            _ => Border::Both,
        }
    }
}

/// A square Go board with capture counts and position history.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    black_captures: u32,
    white_captures: u32,
    zobrist: ZobristTable,
    /// Fingerprint of the current grid
    hash: u64,
    history: PositionHistory,
}

impl Board {
    /// Create an empty `size x size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            grid: Grid::new(size),
            black_captures: 0,
            white_captures: 0,
            zobrist: ZobristTable::new(size * size),
            hash: 0,
            history: PositionHistory::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// Stone at `(row, col)`, or `None` for an empty or off-board point.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.size() || col >= self.size() {
            return None;
        }
        self.grid.cells[self.grid.idx(row, col)]
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.grid.cells.chunks(self.grid.size)
    }

    /// Stones of the opponent removed by Black's moves.
    pub fn black_captures(&self) -> u32 {
        self.black_captures
    }

    /// Stones of the opponent removed by White's moves.
    pub fn white_captures(&self) -> u32 {
        self.white_captures
    }

    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    /// Number of positions recorded for the ko rule.
    pub fn positions_seen(&self) -> usize {
        self.history.len()
    }

    /// Place a `color` stone at `(row, col)`.
    ///
    /// Opponent groups adjacent to the new stone that are left without
    /// liberties are removed first. The move is then rejected if it captured
    /// nothing and its own group has no liberty, or if the resolved position
    /// has already occurred. Returns the number of captured stones.
    ///
    /// # Errors
    /// - [`MoveError::OutOfBounds`] - the point is off the board
    /// - [`MoveError::CellOccupied`] - the point is not empty
    /// - [`MoveError::SuicideMove`] - the move captures nothing and has no liberties
    /// - [`MoveError::KoViolation`] - the resulting position repeats an earlier one
    pub fn occupy(&mut self, row: usize, col: usize, color: Color) -> Result<u32, MoveError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(MoveError::OutOfBounds { row, col, size });
        }
        let at = self.grid.idx(row, col);
        if self.grid.cells[at].is_some() {
            return Err(MoveError::CellOccupied);
        }

        let mut scratch = self.grid.clone();
        scratch.cells[at] = Some(color);
        let mut hash = self.hash ^ self.zobrist.key(at, color);

        let opp = color.opponent();
        let mut captured = 0u32;
        for n in self.grid.neighbors(at) {
            // An earlier neighbor may have been part of the same group
            if scratch.cells[n] == Some(opp) && !scratch.has_liberty(n) {
                for r in scratch.remove_group(n) {
                    hash ^= self.zobrist.key(r, opp);
                    captured += 1;
                }
            }
        }

        if captured == 0 && !scratch.has_liberty(at) {
            return Err(MoveError::SuicideMove);
        }
        if self.history.contains(hash, &scratch.cells) {
            return Err(MoveError::KoViolation);
        }

        self.history.insert(hash, &scratch.cells);
        self.grid = scratch;
        self.hash = hash;
        match color {
            Color::Black => self.black_captures += captured,
            Color::White => self.white_captures += captured,
        }
        Ok(captured)
    }

    /// Count empty points owned by each color as `(black, white)`.
    ///
    /// Each maximal empty region goes to a color only when every stone
    /// bordering it has that color. Regions touching both colors, or no
    /// stones at all, count for nobody.
    pub fn count_territories(&self) -> (u32, u32) {
        let cells = &self.grid.cells;
        let mut visited = vec![false; cells.len()];
        let mut black = 0u32;
        let mut white = 0u32;

        for start in 0..cells.len() {
            if visited[start] || cells[start].is_some() {
                continue;
            }
            visited[start] = true;
            let mut stack = vec![start];
            let mut region = 0u32;
            let mut border = Border::Nobody;

            while let Some(i) = stack.pop() {
                region += 1;
                for n in self.grid.neighbors(i) {
                    match cells[n] {
                        Some(c) => border = border.add(c),
                        None if !visited[n] => {
                            visited[n] = true;
                            stack.push(n);
                        }
                        None => {}
                    }
                }
            }

            match border {
                Border::Only(Color::Black) => black += region,
                Border::Only(Color::White) => white += region,
                Border::Nobody | Border::Both => {}
            }
        }
        (black, white)
    }
}
