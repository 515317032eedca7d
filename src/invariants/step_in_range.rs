//! Step range invariant: the view pointer always lands on a frame.

use super::Invariant;
use crate::game::Game;

/// Invariant: the viewed step indexes an existing frame.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "The viewed step indexes an existing frame"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::position::Position;

    #[test]
    fn new_game_holds() {
        assert!(StepInRangeInvariant::holds(&Game::new()));
    }

    #[test]
    fn holds_after_moves_and_jumps() {
        let mut game = Game::new();
        assert!(game.play(Position::Center));
        assert!(game.play(Position::TopLeft));
        game.jump_to(1);
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn dangling_step_violates() {
        let forged = Game::from_parts(History::new(), 5, true);
        assert!(!StepInRangeInvariant::holds(&forged));
    }
}
