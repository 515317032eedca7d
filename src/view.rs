//! Presentation contract: serializable snapshots for a display layer.
//!
//! The engine never hands out aliased mutable state. A display layer
//! takes a [`GameView`] after each input event and redraws from it; the
//! view owns everything it shows.

use serde::{Deserialize, Serialize};

use crate::game::{Game, GameStatus};
use crate::types::Cell;

/// One entry in the displayed move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    label: String,
    step: usize,
    current: bool,
}

impl MoveEntry {
    /// Display label, e.g. `Go to move #2 --- (col 2, row 2)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The history step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether this entry is the currently viewed step.
    pub fn current(&self) -> bool {
        self.current
    }
}

/// Immutable snapshot of everything a display layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    cells: [Cell; 9],
    status: String,
    winning_line: Option<[usize; 3]>,
    moves: Vec<MoveEntry>,
    move_order_ascending: bool,
    current_step: usize,
}

impl GameView {
    /// The viewed board's cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Status line for the viewed position.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The three winning cell indices, if the viewed board is won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Move-list entries, already in display order.
    pub fn moves(&self) -> &[MoveEntry] {
        &self.moves
    }

    /// Whether the move list runs oldest-first.
    pub fn move_order_ascending(&self) -> bool {
        self.move_order_ascending
    }

    /// The currently viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let mut moves: Vec<MoveEntry> = game
            .history()
            .frames()
            .iter()
            .enumerate()
            .map(|(step, frame)| {
                let label = match frame.placed() {
                    None => "Go to game start".to_string(),
                    Some(mov) => {
                        let (row, col) = mov.position.location();
                        format!("Go to move #{step} --- (col {col}, row {row})")
                    }
                };
                MoveEntry {
                    label,
                    step,
                    current: step == game.current_step(),
                }
            })
            .collect();

        if !game.move_order_ascending() {
            moves.reverse();
        }

        GameView {
            cells: *game.board().cells(),
            status: status_string(game.status()),
            winning_line: game.win().map(|win| win.line.map(|pos| pos.index())),
            moves,
            move_order_ascending: game.move_order_ascending(),
            current_step: game.current_step(),
        }
    }
}

fn status_string(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress(player) => {
            format!("In progress. Player {player:?} to move.")
        }
        GameStatus::Won(player) => format!("Game over. Player {player:?} wins!"),
        GameStatus::Draw => "Game over. Draw!".to_string(),
    }
}
