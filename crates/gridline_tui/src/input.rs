//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor based on arrow keys, clamped to the field.
pub fn move_cursor(cursor: (i32, i32), key: KeyCode, width: i32, height: i32) -> (i32, i32) {
    let (x, y) = cursor;
    match key {
        KeyCode::Left => ((x - 1).max(0), y),
        KeyCode::Right => ((x + 1).min(width - 1), y),
        KeyCode::Up => (x, (y - 1).max(0)),
        KeyCode::Down => (x, (y + 1).min(height - 1)),
        // No change for other keys
        _ => cursor,
    }
}
