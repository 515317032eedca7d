//! Tic-tac-toe engine with replayable move history and time travel.
//!
//! Every accepted move appends an immutable board snapshot to a
//! [`History`]; the view pointer can travel to any past snapshot
//! without recomputation, and playing from a past snapshot truncates
//! the abandoned future. The player to move is always derived from the
//! parity of the viewed step, so turn state can never drift from the
//! history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw classification over board snapshots
//! - **History**: append-only frames, truncated only on replay-from-past
//! - **Game**: the controller applying moves, jumps, and order toggles
//! - **View**: the serializable snapshot handed to a display layer
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! assert!(game.play(Position::TopLeft)); // X
//! assert!(game.play(Position::Center)); // O
//! assert!(!game.play(Position::Center)); // occupied, ignored
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! // Time travel: view the position after the first move.
//! game.jump_to(1);
//! assert_eq!(game.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod game;
mod history;
mod invariants;
mod kani_support;
mod position;
mod rules;
mod types;
mod view;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Contracts
pub use contracts::{CellIsFree, Contract, GameUndecided, LegalMove, MoveContract, PlayersTurn};

// Crate-level exports - Game controller
pub use game::{Game, GameStatus};

// Crate-level exports - History
pub use history::{Frame, History};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, EmptyRootInvariant, HistoryInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicFrameInvariant, StepInRangeInvariant,
};

// Crate-level exports - Positions and rules
pub use position::Position;
pub use rules::{LINES, Win, check_winner, is_draw};

// Crate-level exports - Core types
pub use types::{Board, Cell, Player};

// Crate-level exports - Presentation contract
pub use view::{GameView, MoveEntry};
