//! Board storage

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a flat array of cells addressed by (row, col)
///
/// The raw storage is private; mutation outside this crate routes through
/// [`crate::game::Game`].
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    ///
    /// Returns `Stone::Empty` for out-of-range positions, never panics.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if pos.in_bounds() {
            self.cells[pos.to_index()]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Out-of-range positions are ignored.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if pos.in_bounds() {
            self.cells[pos.to_index()] = stone;
        }
    }

    /// Reset every cell to Empty
    pub(crate) fn clear(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count() as u32
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
