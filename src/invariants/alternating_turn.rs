//! Alternating turn invariant: X, O, X, O, ... from the root frame.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: recorded moves alternate players, starting with X.
///
/// The frame at step `i` was produced by the move at step `i - 1`, so
/// its player is determined by that step's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .frames()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, frame)| {
                frame
                    .placed()
                    .is_some_and(|mov| mov.player == Player::at_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Recorded moves alternate players, starting with X"
    }
}
