//! Position history for the ko rule.
//!
//! Every accepted position is fingerprinted with a Zobrist hash: the XOR of
//! one random key per occupied (cell, color) pair. Placing or removing a stone
//! toggles a single key, so the fingerprint is maintained incrementally
//! instead of rehashing the whole board after each move.
//!
//! Fingerprints only index the history. A hit is confirmed by comparing the
//! full cell contents, so two different positions are never confused even if
//! their fingerprints collide.

use std::collections::HashMap;

use crate::board::Color;
use crate::constants::ZOBRIST_SEED;

/// Random keys for every (cell, color) combination on a board.
#[derive(Clone, Debug)]
pub struct ZobristTable {
    /// Keys for black stones, indexed by cell.
    black: Vec<u64>,
    /// Keys for white stones, indexed by cell.
    white: Vec<u64>,
}

impl ZobristTable {
    /// Build a table for `cells` points from the fixed seed.
    pub fn new(cells: usize) -> Self {
        let mut rng = fastrand::Rng::with_seed(ZOBRIST_SEED);
        let mut black = Vec::with_capacity(cells);
        let mut white = Vec::with_capacity(cells);
        for _ in 0..cells {
            black.push(rng.u64(..));
            white.push(rng.u64(..));
        }
        Self { black, white }
    }

    /// Key toggled when a `color` stone is placed on or removed from `cell`.
    #[inline]
    pub fn key(&self, cell: usize, color: Color) -> u64 {
        match color {
            Color::Black => self.black[cell],
            Color::White => self.white[cell],
        }
    }

    /// Full fingerprint of `cells`, computed from scratch.
    pub fn hash(&self, cells: &[Option<Color>]) -> u64 {
        cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|color| self.key(i, color)))
            .fold(0, |acc, k| acc ^ k)
    }
}

/// Set of previously accepted board positions, compared by content.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    seen: HashMap<u64, Vec<Box<[Option<Color>]>>>,
    len: usize,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the exact position `cells` (with fingerprint `hash`) was seen.
    pub fn contains(&self, hash: u64, cells: &[Option<Color>]) -> bool {
        self.seen
            .get(&hash)
            .is_some_and(|bucket| bucket.iter().any(|p| p[..] == *cells))
    }

    /// Record a position. Returns `false` if it was already present.
    pub fn insert(&mut self, hash: u64, cells: &[Option<Color>]) -> bool {
        if self.contains(hash, cells) {
            return false;
        }
        self.seen.entry(hash).or_default().push(cells.into());
        self.len += 1;
        true
    }

    /// Number of distinct positions recorded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_deterministic() {
        let a = ZobristTable::new(9);
        let b = ZobristTable::new(9);
        for i in 0..9 {
            assert_eq!(a.key(i, Color::Black), b.key(i, Color::Black));
            assert_eq!(a.key(i, Color::White), b.key(i, Color::White));
        }
    }

    #[test]
    fn test_incremental_matches_full_hash() {
        let table = ZobristTable::new(4);
        let mut cells = vec![None; 4];
        let mut hash = table.hash(&cells);
        assert_eq!(hash, 0, "Empty board hashes to zero");

        cells[1] = Some(Color::Black);
        hash ^= table.key(1, Color::Black);
        cells[2] = Some(Color::White);
        hash ^= table.key(2, Color::White);
        assert_eq!(hash, table.hash(&cells));

        // Removing a stone toggles its key back out
        cells[1] = None;
        hash ^= table.key(1, Color::Black);
        assert_eq!(hash, table.hash(&cells));
    }

    #[test]
    fn test_history_compares_content() {
        let mut history = PositionHistory::new();
        let a = [Some(Color::Black), None];
        let b = [None, Some(Color::Black)];

        assert!(history.is_empty());
        assert!(history.insert(7, &a));
        assert!(history.contains(7, &a));

        // Same fingerprint, different content: not a repeat
        assert!(!history.contains(7, &b));
        assert!(history.insert(7, &b));

        assert!(!history.insert(7, &a), "Duplicate position is not re-added");
        assert_eq!(history.len(), 2);
    }
}
