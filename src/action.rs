//! First-class move actions.
//!
//! Moves are domain events, not side effects: they carry the player's
//! intent and can be validated, replayed, and serialized independently
//! of the state they act on.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::types::Player;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position)
    }
}

/// Reasons a move is rejected.
///
/// The click-style API absorbs these silently; the `try_` variants
/// surface them to callers that want the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Position),

    /// The viewed position is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The move's player is not the player to move.
    #[display("It is not {_0:?}'s turn")]
    OutOfTurn(Player),

    /// A history invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
