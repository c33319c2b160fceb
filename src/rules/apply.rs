//! State-mutating rule operations and the unified attempt entry point
//!
//! Rule violations are not errors: every rejected or penalized action
//! resolves to a typed [`AttemptOutcome`]. Each mutation alternates the
//! side to move exactly once and then runs the one win/loss check it could
//! have triggered.

use tracing::debug;

use crate::board::{Board, Pos};
use super::moves::{ChainTag, JumpOption};
use super::win;

pub(crate) const MSG_MANDATORY_JUMP: &str = "jumping is mandatory";
pub(crate) const MSG_KEEP_JUMPING: &str = "must keep jumping";

/// How [`attempt_move`] resolved an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// A plain step was applied
    Moved,
    /// A terminal capture chain was applied
    Jumped,
    /// The action broke the mandatory-capture rule; a fox was removed
    Punished,
    /// The action matched nothing; no state changed
    Ignored,
}

/// Outcome of [`attempt_move`] plus the display message for punishments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptReport {
    pub outcome: AttemptOutcome,
    pub message: Option<&'static str>,
}

impl AttemptReport {
    pub(crate) fn moved() -> Self {
        Self {
            outcome: AttemptOutcome::Moved,
            message: None,
        }
    }

    pub(crate) fn jumped() -> Self {
        Self {
            outcome: AttemptOutcome::Jumped,
            message: None,
        }
    }

    pub(crate) fn punished(message: &'static str) -> Self {
        Self {
            outcome: AttemptOutcome::Punished,
            message: Some(message),
        }
    }

    pub(crate) fn ignored() -> Self {
        Self {
            outcome: AttemptOutcome::Ignored,
            message: None,
        }
    }
}

/// Relocate a piece, alternate the side to move, then check whether the
/// chickens have filled the stall.
pub fn apply_move(board: &mut Board, from: Pos, to: Pos) {
    let piece = board.get(from);
    board.remove(from);
    board.set(to, piece);
    board.flip_side();
    win::check_stall_win(board);
}

/// Remove every captured cell, relocate the jumping fox to the landing
/// cell, alternate the side to move, then check whether the flock has
/// fallen below strength.
pub fn apply_jump(board: &mut Board, jump: &JumpOption) {
    let piece = board.get(jump.origin);
    for &captured in &jump.captured {
        board.remove(captured);
    }
    board.remove(jump.origin);
    board.set(jump.landing, piece);
    board.flip_side();
    win::check_flock_loss(board);
}

/// Remove the piece at `at` without relocation, alternate the side to
/// move, then check whether any fox remains.
pub fn apply_punishment(board: &mut Board, at: Pos) {
    debug!(x = at.x, y = at.y, "removing piece as punishment");
    board.remove(at);
    board.flip_side();
    win::check_foxes_gone(board);
}

/// Unified decision entry point for a selected piece and a destination.
///
/// The caller supplies the legal sets it already queried for the selected
/// piece plus the whole-side jump set, so a UI can both highlight options
/// and resolve the action from one computation:
///
/// - destination is a legal step and the side has no jumps: the step is
///   applied
/// - destination is a legal step but a jump was available: jumping is
///   mandatory, so the offending fox (origin of the first side jump) is
///   removed
/// - destination is the landing of a terminal chain: the chain is applied
/// - destination is the landing of a continuable chain: stopping mid-chain
///   is not allowed, so the selected fox is removed
/// - anything else is ignored without state change
pub fn attempt_move(
    board: &mut Board,
    selected: Pos,
    destination: Pos,
    legal_moves: &[Pos],
    legal_jumps: &[JumpOption],
    side_jumps: &[JumpOption],
) -> AttemptReport {
    if legal_moves.contains(&destination) {
        if let Some(neglected) = side_jumps.first() {
            apply_punishment(board, neglected.origin);
            return AttemptReport::punished(MSG_MANDATORY_JUMP);
        }
        apply_move(board, selected, destination);
        return AttemptReport::moved();
    }

    let matched = legal_jumps
        .iter()
        .find(|j| j.is_terminal() && j.landing == destination)
        .or_else(|| legal_jumps.iter().find(|j| j.landing == destination));
    match matched {
        Some(jump) if jump.tag == ChainTag::Terminal => {
            apply_jump(board, jump);
            AttemptReport::jumped()
        }
        Some(_) => {
            apply_punishment(board, selected);
            AttemptReport::punished(MSG_KEEP_JUMPING)
        }
        None => AttemptReport::ignored(),
    }
}
