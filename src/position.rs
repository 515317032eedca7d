//! Named board cells and their coordinate mappings.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Board;

/// A cell position on the board.
///
/// Variants are declared in row-major order, so the discriminant is the
/// board index (0-8). Display coordinates are 1-based rows and columns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// 1-based display row (1-3).
    pub fn row(self) -> usize {
        self.index() / 3 + 1
    }

    /// 1-based display column (1-3).
    pub fn col(self) -> usize {
        self.index() % 3 + 1
    }

    /// 1-based `(row, col)` display coordinates.
    pub fn location(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Parses a position from a display label or a board index.
    #[instrument]
    pub fn from_label_or_index(s: &str) -> Option<Position> {
        if let Ok(index) = s.trim().parse::<usize>() {
            return Self::from_index(index);
        }

        let needle = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter().find(|pos| pos.label().to_lowercase() == needle)
    }

    /// Filters positions by board state, returning only empty cells.
    #[instrument(skip(board))]
    pub fn open_cells(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
