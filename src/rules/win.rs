//! Win and loss detection
//!
//! Conditions are checked opportunistically by the mutation that could
//! trigger them, not polled: a step move can only complete the stall, a
//! jump can only shrink the flock, a punishment can only eliminate foxes.
//! Stalemate is deliberately not engine-detected; callers probe it through
//! the two all-side queries in [`crate::rules::moves`].

use std::fmt;

use crate::board::{Board, Piece, Pos, Side};

/// Chickens occupying the stall needed to win
pub const STALL_TARGET: usize = 9;

/// Minimum flock size; below this the chickens have lost
pub const MIN_CHICKENS: usize = 9;

/// The stall: the two rows nearest the chickens' target edge plus the
/// three central cells of the third row (nine cells in total).
#[inline]
pub fn is_stall(at: Pos) -> bool {
    at.y <= 1 || (at.y == 2 && (2..=4).contains(&at.x))
}

/// Terminal outcome of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// Nine chickens occupy the stall
    StallFilled,
    /// The flock has been reduced below nine chickens
    FlockDecimated,
    /// No foxes remain on the board
    FoxesEliminated,
}

impl WinReason {
    /// The side that won
    pub fn winner(self) -> Side {
        match self {
            WinReason::StallFilled | WinReason::FoxesEliminated => Side::Chicken,
            WinReason::FlockDecimated => Side::Fox,
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::StallFilled => write!(f, "the chickens have filled the stall"),
            WinReason::FlockDecimated => write!(f, "too few chickens remain"),
            WinReason::FoxesEliminated => write!(f, "no foxes remain"),
        }
    }
}

/// Chickens currently inside the stall
pub fn chickens_in_stall(board: &Board) -> usize {
    board
        .pieces()
        .filter(|&(pos, piece)| piece == Piece::Chicken && is_stall(pos))
        .count()
}

pub(crate) fn check_stall_win(board: &mut Board) {
    if chickens_in_stall(board) >= STALL_TARGET {
        board.record_outcome(WinReason::StallFilled);
    }
}

pub(crate) fn check_flock_loss(board: &mut Board) {
    if board.count(Piece::Chicken) < MIN_CHICKENS {
        board.record_outcome(WinReason::FlockDecimated);
    }
}

pub(crate) fn check_foxes_gone(board: &mut Board) {
    if board.count(Piece::Fox) == 0 {
        board.record_outcome(WinReason::FoxesEliminated);
    }
}
