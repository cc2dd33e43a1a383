//! Draw detection.

use super::win::check_win;
use crate::board::Board;
use crate::types::{Cell, Player};

/// True iff every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// True iff the board is full and neither player has a winning run.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Player::Human) && !check_win(board, Player::Computer)
}
