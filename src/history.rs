//! Replayable history of immutable board snapshots.
//!
//! Every accepted move produces a fresh [`Frame`] rather than mutating
//! the previous one. Time travel is therefore a pointer move, never a
//! recomputation, and a reader holding an old frame can never observe
//! a torn state.

use serde::{Deserialize, Serialize};

use crate::action::Move;
use crate::types::Board;

/// A single history entry: a board snapshot plus the move that produced it.
///
/// The root frame carries no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    board: Board,
    placed: Option<Move>,
}

impl Frame {
    /// The root frame: an empty board with no move.
    pub(crate) fn root() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Creates a frame recording the move that produced `board`.
    pub(crate) fn new(board: Board, placed: Move) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, absent for the root frame.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}

/// Ordered sequence of frames from game start to the latest move.
///
/// Frame 0 is always the empty board. Frames are immutable once pushed;
/// the only removal is truncation of an abandoned future when a move is
/// played from an earlier step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    frames: Vec<Frame>,
}

impl History {
    /// Creates a history holding only the root frame.
    pub(crate) fn new() -> Self {
        Self {
            frames: vec![Frame::root()],
        }
    }

    /// Builds a history from raw frames, bypassing move validation.
    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames, including the root frame.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the history holds no frames.
    ///
    /// Never true for a history built through the engine, which always
    /// starts from the root frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame at `step`, if in range.
    pub fn frame(&self, step: usize) -> Option<&Frame> {
        self.frames.get(step)
    }

    /// All frames in step order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Drops every frame after `step`, keeping `step + 1` frames.
    pub(crate) fn truncate_to(&mut self, step: usize) {
        self.frames.truncate(step + 1);
    }

    /// Appends a frame.
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}
