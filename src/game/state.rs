//! Game state and lifecycle.

use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// The three end states are terminal: the controller ignores placement
/// requests until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// One placement made by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Row index of the placement.
    pub row: usize,
    /// Column index of the placement.
    pub col: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.row, self.col)
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark that moves next.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
    /// Plies in the order they were made.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new in-progress game on an empty board, X to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark, records the ply, and passes the
    /// turn.
    ///
    /// Returns `false` without side effects when the placement is rejected
    /// (occupied or out of bounds).
    pub(crate) fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let mark = self.current_player;
        if !self.board.place(row, col, mark) {
            return false;
        }
        self.history.push(Move { mark, row, col });
        self.current_player = mark.opponent();
        // Marks on the board always equal completed plies.
        debug_assert_eq!(self.board.mark_count(), self.history.len());
        true
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}
