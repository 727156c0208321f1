//! Application state and logic.

use crossterm::event::KeyCode;
use gridtactoe::{Game, GameConfig, GameState, GameStatus, Mark, RandomChooser};
use tracing::debug;

use super::input;

/// Main application state: the owned game plus presentation scraps.
pub struct App {
    game: Game<RandomChooser>,
    cell_size: u16,
    cursor: (usize, usize),
    status_message: String,
}

impl App {
    /// Creates the application around a fresh game.
    pub fn new(config: &GameConfig, chooser: RandomChooser) -> Self {
        let size = *config.size();
        Self {
            game: Game::with_chooser(size, chooser),
            cell_size: *config.cell_size(),
            cursor: (size / 2, size / 2),
            status_message: "You are X. Click a cell or press Enter to place.".to_string(),
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.game.board().size()
    }

    /// Configured pixel size of one grid cell.
    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Current cursor position.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key, self.size());
    }

    /// Requests a placement at the cursor.
    pub fn place_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        self.place(row, col);
    }

    /// Requests a placement at the given cell and refreshes the status
    /// line. A rejected request leaves the game untouched.
    pub fn place(&mut self, row: usize, col: usize) {
        let accepted = self.game.handle_human_move(row, col);
        debug!(row, col, accepted, "handled placement request");
        self.refresh_status(accepted);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game.reset();
        self.status_message = "Game restarted. You are X.".to_string();
    }

    fn refresh_status(&mut self, accepted: bool) {
        self.status_message = match self.game.status() {
            GameStatus::Won(Mark::X) => "X Wins! R: Replay, Q: Quit".to_string(),
            GameStatus::Won(Mark::O) => "O Wins! R: Replay, Q: Quit".to_string(),
            GameStatus::Draw => "Tie! R: Replay, Q: Quit".to_string(),
            GameStatus::InProgress if accepted => {
                format!(
                    "{} plies played. Your move.",
                    self.game.state().history().len()
                )
            }
            GameStatus::InProgress => "That cell is taken or out of range.".to_string(),
        };
    }
}
