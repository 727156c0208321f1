//! Core domain types: marks, cells, and the N×N board.

use serde::{Deserialize, Serialize};

/// A side's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The human side (moves first).
    X,
    /// The computer side.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// N×N board of cells, row-major.
///
/// The dimension is fixed at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given position, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Checks if the cell at the given position is empty.
    ///
    /// Out-of-bounds positions are not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Places a mark at the given position.
    ///
    /// Succeeds iff the position is in bounds and the cell is empty.
    /// Returns `false` otherwise, leaving the board untouched: an occupied
    /// or out-of-range placement is a normal outcome the caller must check,
    /// not an error.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if self.is_empty(row, col) {
            self.cells[row * self.size + col] = Cell::Occupied(mark);
            true
        } else {
            false
        }
    }

    /// Checks if the board is completely filled.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// All empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_empty(row, col))
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col + 1 < self.size {
                    result.push(' ');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
            }
        }
        result
    }
}
