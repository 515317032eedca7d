//! Kani `Arbitrary` implementations for the domain types.
//!
//! These allow the model checker to explore all possible values of the
//! types during proof runs.

#[cfg(kani)]
use crate::{Board, Cell, Move, Player, Position};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::from_index(index).unwrap()
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Marked(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}
