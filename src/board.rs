use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::warn;

use crate::{
    cell::Cell,
    pattern::{self, PatternError},
};

/// Offsets of the Moore neighbourhood, center excluded.
#[rustfmt::skip]
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Returned by every cell mutation once the board has been frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("board is frozen, cell states can't change after the game has started")]
pub struct FrozenBoardError;

/// Fixed-size grid of cells with a one-way freeze switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    frozen: bool,
}

impl Board {

    /// Creates a `rows` x `cols` board with every cell dead.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive, got {rows}x{cols}");

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect();

        Board {
            rows,
            cols,
            cells,
            frozen: false,
        }
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn count_of_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn count_of_alive_cells(&self) -> usize {
        self.cells().filter(|c| c.is_alive()).count()
    }

    pub fn count_of_dead_cells(&self) -> usize {
        self.cells().filter(|c| c.is_dead()).count()
    }

    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn is_cell_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_alive()
    }

    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn is_cell_dead(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_dead()
    }

    pub fn sign_cell_as_alive(&mut self, row: usize, col: usize) -> Result<(), FrozenBoardError> {
        self.writable_cell(row, col)?.come_to_life();
        Ok(())
    }

    pub fn sign_cell_as_dead(&mut self, row: usize, col: usize) -> Result<(), FrozenBoardError> {
        self.writable_cell(row, col)?.die();
        Ok(())
    }

    /// Every cell exactly once, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn is_out_of_bounds(&self, row: isize, col: isize) -> bool {
        row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols
    }

    /// Live cells among the eight neighbours of `(row, col)`. Positions off
    /// the grid are skipped, so edges and corners see fewer candidates.
    /// Neighbours that would overflow `isize` are off the grid too.
    pub fn population_size_of_cell(&self, row: isize, col: isize) -> usize {
        NEIGHBOURS
            .iter()
            .filter_map(|&(dr, dc)| self.get(row.checked_add(dr)?, col.checked_add(dc)?))
            .filter(|c| c.is_alive())
            .count()
    }

    /// One-way: there is no way back to an unfrozen board.
    #[inline]
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Game's apply phase writes through here, past the freeze switch.
    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let i = self.index(row, col);
        &mut self.cells[i]
    }

    pub(crate) fn from_rows(data: Vec<Vec<bool>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        let mut board = Board::new(rows, cols);
        for (cell, alive) in board.cells.iter_mut().zip(data.into_iter().flatten()) {
            if alive {
                cell.come_to_life();
            }
        }
        board
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    fn writable_cell(&mut self, row: usize, col: usize) -> Result<&mut Cell, FrozenBoardError> {
        if self.frozen {
            warn!(row, col, "rejected mutation of a frozen board");
            return Err(FrozenBoardError);
        }
        Ok(self.cell_mut(row, col))
    }

    #[inline]
    fn get(&self, row: isize, col: isize) -> Option<&Cell> {
        if self.is_out_of_bounds(row, col) {
            None
        } else {
            Some(self.cell(row as usize, col as usize))
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} board", self.rows, self.cols,
        );
        row * self.cols + col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for c in row {
                f.write_str(if c.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pattern::parse(s)
    }
}
