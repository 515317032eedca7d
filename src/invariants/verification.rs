//! Formal verification of history invariants using the Kani model checker.
//!
//! These proof harnesses verify the invariants for ALL possible inputs
//! within the stated bounds, not just the cases the tests enumerate.

#[cfg(kani)]
mod proofs {
    use crate::{Cell, Game, HistoryInvariants, InvariantSet, Move, check_winner};

    /// Any sequence of attempted moves leaves the invariant set intact:
    /// rejected moves change nothing, accepted moves extend the history
    /// by one consistent frame.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_moves_preserve_invariants() {
        let mut game = Game::new();

        for _ in 0..3 {
            let mov: Move = kani::any();
            let _ = game.try_apply(mov);
        }

        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    /// A reported win is backed by three matching marks on the board.
    #[kani::proof]
    fn verify_win_line_is_marked() {
        let board: crate::Board = kani::any();

        if let Some(win) = check_winner(&board) {
            for pos in win.line {
                assert!(board.get(pos) == Cell::Marked(win.player));
            }
        }
    }
}
