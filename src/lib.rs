//! Gridtactoe library - tic-tac-toe on an N×N grid
//!
//! The human plays X against a uniformly random computer O; the first run
//! of three consecutive marks along a row, column, or diagonal wins.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] cells with placement and full-board checks
//! - **Rules**: brute-force triple scan over every 3-window ([`has_line`])
//! - **Controller**: [`Game`] drives the ply state machine and reset
//! - **Opponent**: uniform choice among empty cells behind [`Chooser`]
//! - **Config**: [`GameConfig`] settings (board size, cell size)
//!
//! The terminal shell lives in the binary; this crate holds the logic.
//!
//! # Example
//!
//! ```
//! use gridtactoe::{Game, GameStatus};
//!
//! let mut game = Game::new(9);
//! game.handle_human_move(4, 4);
//! assert_eq!(game.board().mark_count(), 2); // X plus the computer's O
//! game.reset();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;

// Crate-level exports - configuration
pub use config::{ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_CELL_SIZE, GameConfig, MIN_BOARD_SIZE};

// Crate-level exports - board model and rules
pub use game::{Board, Cell, Mark, WIN_LEN, check_winner, has_line};

// Crate-level exports - controller and state
pub use game::{Game, GameState, GameStatus, Move};

// Crate-level exports - opponent move selection
pub use game::opponent::{Chooser, RandomChooser, pick_open_cell};
