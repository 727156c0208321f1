//! Scenario tests for the game controller.
//!
//! The computer's choice source is scripted: each entry is an index into
//! the current list of empty cells (row-major). An exhausted script
//! panics, which doubles as the assertion that the opponent selector is
//! never consulted after a rejected request or a finished game.

use gridtactoe::{Cell, Chooser, Game, GameState, GameStatus, Mark, RandomChooser};
use std::collections::VecDeque;

struct ScriptedChooser {
    picks: VecDeque<usize>,
}

impl ScriptedChooser {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
        }
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        let pick = self.picks.pop_front().expect("unexpected opponent move");
        assert!(pick < len, "scripted pick out of range");
        Some(pick)
    }
}

#[test]
fn test_human_win_stops_before_opponent_moves() {
    // Computer answers (1,0) then (1,1); the script is exhausted before
    // X completes the top row, so a third consultation would panic.
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[2, 1]));

    assert!(game.handle_human_move(0, 0));
    assert!(game.handle_human_move(0, 1));
    assert_eq!(game.status(), GameStatus::InProgress);

    assert!(game.handle_human_move(0, 2));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.state().history().len(), 5);
}

#[test]
fn test_computer_win_ends_game() {
    // Computer builds the middle row while X scatters.
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[2, 1, 1]));

    assert!(game.handle_human_move(0, 0));
    assert!(game.handle_human_move(0, 2));
    assert!(game.handle_human_move(2, 0));

    assert_eq!(game.status(), GameStatus::Won(Mark::O));
    let board = game.board();
    assert_eq!(board.get(1, 0), Some(Cell::Occupied(Mark::O)));
    assert_eq!(board.get(1, 1), Some(Cell::Occupied(Mark::O)));
    assert_eq!(board.get(1, 2), Some(Cell::Occupied(Mark::O)));
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[0, 1, 0, 0]));

    assert!(game.handle_human_move(0, 0));
    assert!(game.handle_human_move(0, 2));
    assert!(game.handle_human_move(1, 0));
    assert!(game.handle_human_move(2, 1));
    assert_eq!(game.status(), GameStatus::InProgress);

    // The last open cell; the board fills with no run of three anywhere.
    assert!(game.handle_human_move(2, 2));
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_occupied_request_consumes_no_turn() {
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[0]));

    assert!(game.handle_human_move(0, 0));
    let before = game.state().clone();

    // Own mark, computer's mark, and out-of-range: all ignored, and the
    // exhausted script proves no computer move follows.
    assert!(!game.handle_human_move(0, 0));
    assert!(!game.handle_human_move(0, 1));
    assert!(!game.handle_human_move(5, 5));

    assert_eq!(game.state(), &before);
}

#[test]
fn test_terminal_state_ignores_requests() {
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[2, 1]));
    game.handle_human_move(0, 0);
    game.handle_human_move(0, 1);
    game.handle_human_move(0, 2);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));

    let before = game.state().clone();
    assert!(!game.handle_human_move(2, 2));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::with_chooser(3, ScriptedChooser::new(&[2, 1]));
    game.handle_human_move(0, 0);
    game.handle_human_move(0, 1);
    game.handle_human_move(0, 2);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));

    game.reset();
    assert_eq!(game.state(), &GameState::new(3));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.state().current_player(), Mark::X);
    assert_eq!(game.board().mark_count(), 0);
}

#[test]
fn test_reset_works_mid_game() {
    let mut game = Game::with_chooser(9, ScriptedChooser::new(&[0, 0]));
    game.handle_human_move(4, 4);
    game.handle_human_move(5, 5);

    game.reset();
    assert_eq!(game.state(), &GameState::new(9));
}

#[test]
fn test_plies_alternate_and_match_marks_on_board() {
    let mut game = Game::with_chooser(9, ScriptedChooser::new(&[0, 10, 20]));
    game.handle_human_move(4, 4);
    game.handle_human_move(6, 5);
    game.handle_human_move(2, 7);
    assert_eq!(game.status(), GameStatus::InProgress);

    let history = game.state().history();
    assert_eq!(history.len(), 6);
    assert_eq!(game.board().mark_count(), history.len());
    for (index, ply) in history.iter().enumerate() {
        let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(ply.mark, expected);
    }
    assert_eq!(game.state().current_player(), Mark::X);
}

#[test]
fn test_seeded_games_replay_identically() {
    let moves = [(4, 4), (0, 7), (8, 1), (5, 6)];

    let mut first = Game::with_chooser(9, RandomChooser::seeded(1234));
    let mut second = Game::with_chooser(9, RandomChooser::seeded(1234));
    for (row, col) in moves {
        first.handle_human_move(row, col);
        second.handle_human_move(row, col);
    }

    assert_eq!(first.state(), second.state());
}
