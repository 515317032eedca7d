//! Monotonic frame invariant: each frame adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Cell;

/// Invariant: consecutive frames differ in exactly one cell.
///
/// The changed cell was empty in the earlier frame and now holds the
/// mark of the recorded move's player, at the recorded move's position.
/// Every cell a past frame holds is therefore permanent for as long as
/// that frame is reachable.
pub struct MonotonicFrameInvariant;

impl Invariant<Game> for MonotonicFrameInvariant {
    fn holds(game: &Game) -> bool {
        for pair in game.history().frames().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);

            // Every non-root frame must record the move that produced it.
            let Some(mov) = next.placed() else {
                return false;
            };

            if prev.board().get(mov.position) != Cell::Empty {
                return false;
            }
            if next.board().get(mov.position) != Cell::Marked(mov.player) {
                return false;
            }

            let rest_unchanged = Position::ALL
                .iter()
                .filter(|&&pos| pos != mov.position)
                .all(|&pos| prev.board().get(pos) == next.board().get(pos));
            if !rest_unchanged {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each frame adds exactly one mark to a previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::history::{Frame, History};
    use crate::types::{Board, Player};

    #[test]
    fn new_game_holds() {
        assert!(MonotonicFrameInvariant::holds(&Game::new()));
    }

    #[test]
    fn holds_after_moves() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::BottomLeft),
        ];
        let game = Game::replay(&moves).expect("valid replay");
        assert!(MonotonicFrameInvariant::holds(&game));
    }

    #[test]
    fn overwritten_cell_violates() {
        // Second frame flips the center mark instead of adding a new one.
        let mut first = Board::new();
        first.set(Position::Center, Cell::Marked(Player::X));
        let mut second = Board::new();
        second.set(Position::Center, Cell::Marked(Player::O));

        let forged = Game::from_parts(
            History::from_frames(vec![
                Frame::root(),
                Frame::new(first, Move::new(Player::X, Position::Center)),
                Frame::new(second, Move::new(Player::O, Position::Center)),
            ]),
            2,
            true,
        );

        assert!(!MonotonicFrameInvariant::holds(&forged));
    }

    #[test]
    fn two_new_marks_violate() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Marked(Player::X));
        board.set(Position::Center, Cell::Marked(Player::X));

        let forged = Game::from_parts(
            History::from_frames(vec![
                Frame::root(),
                Frame::new(board, Move::new(Player::X, Position::Center)),
            ]),
            1,
            true,
        );

        assert!(!MonotonicFrameInvariant::holds(&forged));
    }
}
