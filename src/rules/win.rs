//! Win detection over the fixed winning lines.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Cell, Player};

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Scan order is part of the contract: when a board holds more than one
/// completed line, the first in this order is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player holding the line.
    pub player: Player,
    /// The three cells forming the line, in scan order.
    pub line: [Position; 3],
}

/// Scans the board for a completed line.
///
/// Returns the winning player and the line they hold, or `None` if no
/// line is complete. `None` is distinct from a draw: callers classify a
/// full board without a winner via [`is_draw`](super::is_draw).
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(player) = board.get(a)
            && board.get(b) == Cell::Marked(player)
            && board.get(c) == Cell::Marked(player)
        {
            return Some(Win { player, line });
        }
    }

    None
}
