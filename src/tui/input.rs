//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor with the arrow keys, clamped to the board edges.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode, size: usize) -> (usize, usize) {
    let (row, col) = cursor;
    let last = size.saturating_sub(1);

    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        // No change for other keys
        _ => cursor,
    }
}
