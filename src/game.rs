//! Game controller: turn alternation, time travel, and derived status.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::history::{Frame, History};
use crate::position::Position;
use crate::rules::{self, Win};
use crate::types::{Board, Cell, Player};

/// Status of the currently viewed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player is next to move.
    InProgress(Player),
    /// Game ended with a winner.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state: history, view pointer, and move-list order.
///
/// The player to move is never stored. It is derived from the parity of
/// the viewed step, so it cannot desynchronize from the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: History,
    current_step: usize,
    ascending: bool,
}

impl Game {
    /// Creates a new game viewing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            ascending: true,
        }
    }

    /// Builds a game from raw parts, bypassing move validation.
    pub(crate) fn from_parts(history: History, current_step: usize, ascending: bool) -> Self {
        Self {
            history,
            current_step,
            ascending,
        }
    }

    /// The full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The currently viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is presented oldest-first.
    pub fn move_order_ascending(&self) -> bool {
        self.ascending
    }

    /// The currently viewed board.
    pub fn board(&self) -> &Board {
        self.history.frames()[self.current_step].board()
    }

    /// The player to move at the viewed step, derived from parity.
    pub fn next_player(&self) -> Player {
        Player::at_step(self.current_step)
    }

    /// The completed line on the viewed board, if any.
    pub fn win(&self) -> Option<Win> {
        rules::check_winner(self.board())
    }

    /// Status of the viewed position, derived on every call.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.win() {
            GameStatus::Won(win.player)
        } else if self.board().is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Positions still open on the viewed board.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_cells(self.board())
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Clicks on a decided position or an occupied cell are absorbed:
    /// the state is left unchanged and `false` is returned. Everything
    /// else appends a frame, advances the view, and returns `true`.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> bool {
        match self.try_play(pos) {
            Ok(()) => true,
            Err(reason) => {
                warn!(%reason, "move ignored");
                false
            }
        }
    }

    /// Fallible variant of [`play`](Self::play), reporting why a move
    /// was rejected.
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.try_apply(Move::new(self.next_player(), pos))
    }

    /// Applies a first-class move, validating cell, turn, and status.
    ///
    /// On success the history is truncated to the viewed step (dropping
    /// any future abandoned by time travel), a fresh frame is appended,
    /// and the view advances to it. Frames up to the old step are never
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition: [`MoveError::GameOver`],
    /// [`MoveError::CellOccupied`], or [`MoveError::OutOfTurn`].
    #[instrument(skip(self), fields(player = ?mov.player, position = %mov.position))]
    pub fn try_apply(&mut self, mov: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.history.truncate_to(self.current_step);
        let mut board = self.board().clone();
        board.set(mov.position, Cell::Marked(mov.player));
        self.history.push(Frame::new(board, mov));
        self.current_step = self.history.len() - 1;

        debug!(step = self.current_step, "move accepted");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }

    /// Moves the view pointer to `step` without altering history.
    ///
    /// The move list only ever offers in-range steps, so an out-of-range
    /// argument is a caller bug; it is debug-asserted and otherwise
    /// ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "jump target out of range");
        if step < self.history.len() {
            self.current_step = step;
        } else {
            warn!(step, len = self.history.len(), "jump target out of range, ignored");
        }
    }

    /// Flips the move-list display order.
    ///
    /// Affects presentation only; history and view pointer are untouched.
    pub fn toggle_move_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Rebuilds a game by applying `moves` from the start, validating
    /// every step.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for mov in moves {
            game.try_apply(*mov)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
