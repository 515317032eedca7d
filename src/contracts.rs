//! Contract-based validation for move transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions gate whether a move may be applied; postconditions
//! verify that the transition preserved the history invariants.

use tracing::instrument;

use crate::action::{Move, MoveError};
use crate::game::{Game, GameStatus};
use crate::invariants::{HistoryInvariants, InvariantSet};

/// A contract defines preconditions and postconditions for a state
/// transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the viewed position must not be decided.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks that the viewed position is still in progress.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match game.status() {
            GameStatus::InProgress(_) => Ok(()),
            GameStatus::Won(_) | GameStatus::Draw => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsFree;

impl CellIsFree {
    /// Checks that the move's cell is unoccupied on the viewed board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the move's player against the parity-derived turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player == game.next_player() {
            Ok(())
        } else {
            Err(MoveError::OutOfTurn(mov.player))
        }
    }
}

/// Composite precondition: a move is legal when the game is undecided,
/// the cell is free, and it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        CellIsFree::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move contract (pre + post)
// ─────────────────────────────────────────────────────────────

/// Contract for move transitions.
///
/// Preconditions: [`LegalMove`].
/// Postconditions: every invariant in [`HistoryInvariants`] holds on
/// the resulting state.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
