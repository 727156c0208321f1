mod controller;
pub mod opponent;
mod rules;
mod state;
mod types;

pub use controller::Game;
pub use opponent::{Chooser, RandomChooser};
pub use rules::{WIN_LEN, check_winner, has_line};
pub use state::{GameState, GameStatus, Move};
pub use types::{Board, Cell, Mark};
