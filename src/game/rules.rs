//! Win detection for the grid board.

use super::types::{Board, Cell, Mark};
use tracing::instrument;

/// Length of a winning run.
pub const WIN_LEN: usize = 3;

/// Checks if the mark owns a run of [`WIN_LEN`] consecutive cells.
///
/// Scans every length-3 window along rows, columns, and both diagonal
/// directions, at every valid offset. Overlapping windows are all checked,
/// so a longer run wins wherever any 3-window of it matches; an
/// edge-to-edge line is not treated specially.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    if n < WIN_LEN {
        return false;
    }
    let target = Some(Cell::Occupied(mark));

    // Horizontal runs
    for row in 0..n {
        for col in 0..=n - WIN_LEN {
            if (0..WIN_LEN).all(|i| board.get(row, col + i) == target) {
                return true;
            }
        }
    }

    // Vertical runs
    for col in 0..n {
        for row in 0..=n - WIN_LEN {
            if (0..WIN_LEN).all(|i| board.get(row + i, col) == target) {
                return true;
            }
        }
    }

    // Diagonal runs, both directions
    for row in 0..=n - WIN_LEN {
        for col in 0..=n - WIN_LEN {
            if (0..WIN_LEN).all(|i| board.get(row + i, col + i) == target) {
                return true;
            }
            if (0..WIN_LEN).all(|i| board.get(row + i, col + WIN_LEN - 1 - i) == target) {
                return true;
            }
        }
    }

    false
}

/// Checks for a winner on the board, X first.
pub fn check_winner(board: &Board) -> Option<Mark> {
    if has_line(board, Mark::X) {
        Some(Mark::X)
    } else if has_line(board, Mark::O) {
        Some(Mark::O)
    } else {
        None
    }
}
