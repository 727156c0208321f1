//! Tests for the board model.

use gridtactoe::{Board, Cell, Mark};

#[test]
fn test_place_on_empty_cell_succeeds() {
    for size in [3, 5, 9] {
        let mut board = Board::new(size);
        assert!(board.place(0, 0, Mark::X));
        assert!(board.place(size - 1, size - 1, Mark::O));

        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(size - 1, size - 1), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.mark_count(), 2);
    }
}

#[test]
fn test_place_on_occupied_cell_fails_unchanged() {
    let mut board = Board::new(3);
    assert!(board.place(1, 1, Mark::X));

    let before = board.clone();
    assert!(!board.place(1, 1, Mark::O));
    assert_eq!(board, before);
    assert_eq!(board.get(1, 1), Some(Cell::Occupied(Mark::X)));
}

#[test]
fn test_place_out_of_bounds_fails_unchanged() {
    let mut board = Board::new(3);
    let before = board.clone();

    assert!(!board.place(3, 0, Mark::X));
    assert!(!board.place(0, 3, Mark::X));
    assert!(!board.place(usize::MAX, 0, Mark::X));
    assert_eq!(board, before);
}

#[test]
fn test_is_full_progression() {
    let mut board = Board::new(3);
    assert!(!board.is_full());

    for row in 0..3 {
        for col in 0..3 {
            assert!(!board.is_full());
            // No winner checks here: fill order alternates marks enough to
            // exercise only fullness.
            board.place(row, col, if (row + col) % 2 == 0 { Mark::X } else { Mark::O });
        }
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_empty_cells_shrink_with_each_placement() {
    let mut board = Board::new(4);
    assert_eq!(board.empty_cells().len(), 16);

    board.place(2, 3, Mark::X);
    let open = board.empty_cells();
    assert_eq!(open.len(), 15);
    assert!(!open.contains(&(2, 3)));
}

#[test]
fn test_display_shows_marks() {
    let mut board = Board::new(3);
    board.place(0, 0, Mark::X);
    board.place(1, 1, Mark::O);

    let text = board.display();
    assert_eq!(text, "X . .\n. O .\n. . .");
}
