//! Win detection along board lines.

use crate::board::Board;
use crate::types::{Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Scan direction for winning runs.
///
/// Left-pointing and upward runs are covered by starting the scan from
/// their other end, so four directions span all eight orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Horizontal, left to right.
    East,
    /// Diagonal, down-right.
    SouthEast,
    /// Vertical, top to bottom.
    South,
    /// Diagonal, up-right.
    NorthEast,
}

impl Direction {
    /// Step vector `(dx, dy)` for this direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::NorthEast => (1, -1),
        }
    }
}

/// True iff `player` owns a contiguous run of `board.win_length()`
/// marks along any direction.
///
/// Scans every start cell and all four directions, returning at the
/// first complete run. No memoization: every call walks the board, and
/// the opponent strategy's probe loop relies on that exact cost model.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    for y in 0..board.height() {
        for x in 0..board.width() {
            for dir in Direction::iter() {
                let (dx, dy) = dir.step();
                if check_line(board, x, y, dx, dy, board.win_length(), player) {
                    return true;
                }
            }
        }
    }
    false
}

/// Checks a single run of `len` cells from `(x, y)` stepping by
/// `(dx, dy)`.
///
/// The far end of the run must be a valid cell or the check fails
/// immediately; runs never wrap around the board edge.
pub fn check_line(board: &Board, x: i32, y: i32, dx: i32, dy: i32, len: i32, player: Player) -> bool {
    let far_x = x + (len - 1) * dx;
    let far_y = y + (len - 1) * dy;
    if !board.is_valid_cell(far_x, far_y) {
        return false;
    }
    for i in 0..len {
        if board.get(x + i * dx, y + i * dy) != Cell::Occupied(player) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, cells: &[(i32, i32)], player: Player) {
        for &(x, y) in cells {
            board.set(x, y, Cell::Occupied(player));
        }
    }

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::new(3, 3, 3);
        assert!(!check_win(&board, Player::Human));
        assert!(!check_win(&board, Player::Computer));
    }

    #[test]
    fn test_win_horizontal() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, &[(0, 1), (1, 1), (2, 1)], Player::Human);
        assert!(check_win(&board, Player::Human));
        assert!(!check_win(&board, Player::Computer));
    }

    #[test]
    fn test_win_vertical() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, &[(2, 0), (2, 1), (2, 2)], Player::Computer);
        assert!(check_win(&board, Player::Computer));
    }

    #[test]
    fn test_win_diagonal_down_right() {
        let mut board = Board::new(4, 4, 3);
        place(&mut board, &[(1, 0), (2, 1), (3, 2)], Player::Human);
        assert!(check_win(&board, Player::Human));
    }

    #[test]
    fn test_win_diagonal_up_right() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, &[(0, 2), (1, 1), (2, 0)], Player::Human);
        assert!(check_win(&board, Player::Human));
    }

    #[test]
    fn test_no_wraparound_across_edge() {
        let mut board = Board::new(3, 3, 3);
        // Three marks that only line up if a run could wrap the edge.
        place(&mut board, &[(1, 0), (2, 0), (0, 1)], Player::Human);
        assert!(!check_win(&board, Player::Human));
    }

    #[test]
    fn test_run_shorter_than_win_length() {
        let mut board = Board::new(5, 5, 4);
        place(&mut board, &[(0, 0), (1, 0), (2, 0)], Player::Human);
        assert!(!check_win(&board, Player::Human));
    }

    #[test]
    fn test_unsatisfiable_win_length_never_wins() {
        let mut board = Board::new(3, 3, 4);
        for y in 0..3 {
            for x in 0..3 {
                board.set(x, y, Cell::Occupied(Player::Human));
            }
        }
        assert!(!check_win(&board, Player::Human));
    }

    #[test]
    fn test_check_line_rejects_out_of_bounds_end() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, &[(1, 0), (2, 0)], Player::Human);
        // Far end (3, 0) is off the board, so the run fails even
        // though every in-bounds cell matches.
        assert!(!check_line(&board, 1, 0, 1, 0, 3, Player::Human));
    }

    #[test]
    fn test_check_line_exact_run() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, &[(0, 0), (1, 1), (2, 2)], Player::Computer);
        assert!(check_line(&board, 0, 0, 1, 1, 3, Player::Computer));
        assert!(!check_line(&board, 0, 0, 1, 0, 3, Player::Computer));
    }
}
