//! Turn controller for the human-vs-computer state machine.

use super::opponent::{self, Chooser, RandomChooser};
use super::rules;
use super::state::{GameState, GameStatus};
use super::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// Game engine driving one human-vs-computer match.
///
/// The human always plays X and moves first; the computer answers each
/// accepted human ply with a uniformly random O within the same request.
/// Terminal states ignore placement requests until [`Game::reset`].
#[derive(Debug)]
pub struct Game<C: Chooser = RandomChooser> {
    state: GameState,
    chooser: C,
}

impl Game<RandomChooser> {
    /// Creates a new game with an OS-seeded random opponent.
    pub fn new(size: usize) -> Self {
        Self::with_chooser(size, RandomChooser::new())
    }
}

impl<C: Chooser> Game<C> {
    /// Creates a new game with the given choice source.
    pub fn with_chooser(size: usize, chooser: C) -> Self {
        Self {
            state: GameState::new(size),
            chooser,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Handles a human placement request at the given position.
    ///
    /// Drives the full ply: places X and evaluates the board, then lets
    /// the computer answer and evaluates again if the game goes on. A
    /// request while the game is over, or aimed at an occupied or
    /// out-of-range cell, is silently ignored: no turn is consumed and the
    /// computer does not move.
    ///
    /// Returns whether the human placement was applied.
    #[instrument(skip(self))]
    pub fn handle_human_move(&mut self, row: usize, col: usize) -> bool {
        if self.state.status().is_terminal() {
            debug!("placement request ignored: game is over");
            return false;
        }
        if !self.state.apply_move(row, col) {
            debug!("placement request ignored: cell occupied or out of range");
            return false;
        }

        if rules::has_line(self.state.board(), Mark::X) {
            info!("X wins");
            self.state.set_status(GameStatus::Won(Mark::X));
            return true;
        }
        if self.state.board().is_full() {
            info!("tie");
            self.state.set_status(GameStatus::Draw);
            return true;
        }

        self.computer_reply();
        true
    }

    /// Plays the computer's answering O and updates the status.
    fn computer_reply(&mut self) {
        if let Some((row, col)) = opponent::pick_open_cell(self.state.board(), &mut self.chooser) {
            let placed = self.state.apply_move(row, col);
            debug_assert!(placed, "selected cell must be open");

            if rules::has_line(self.state.board(), Mark::O) {
                info!("O wins");
                self.state.set_status(GameStatus::Won(Mark::O));
            } else if self.state.board().is_full() {
                info!("tie");
                self.state.set_status(GameStatus::Draw);
            }
        }
    }

    /// Discards the board and starts over: same dimension, empty cells,
    /// X to move, in progress. Callable at any time, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.state = GameState::new(self.state.board().size());
    }
}
