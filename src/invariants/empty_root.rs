//! Root frame invariant: history begins at the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: the first frame is the empty board with no recorded move.
///
/// Time travel to step 0 must always land on a pristine game.
pub struct EmptyRootInvariant;

impl Invariant<Game> for EmptyRootInvariant {
    fn holds(game: &Game) -> bool {
        match game.history().frames().first() {
            Some(root) => *root.board() == Board::new() && root.placed().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History begins with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::history::{Frame, History};
    use crate::position::Position;
    use crate::types::{Cell, Player};

    #[test]
    fn new_game_holds() {
        assert!(EmptyRootInvariant::holds(&Game::new()));
    }

    #[test]
    fn holds_after_moves() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopLeft));
        assert!(EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn marked_root_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Marked(Player::X));
        let forged = Game::from_parts(
            History::from_frames(vec![Frame::new(
                board,
                Move::new(Player::X, Position::Center),
            )]),
            0,
            true,
        );

        assert!(!EmptyRootInvariant::holds(&forged));
    }
}
