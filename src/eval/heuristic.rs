//! Fixed heuristic evaluation over snapshots
//!
//! Scores are always from the chickens' perspective; the fox minimizes the
//! same number. The weights are hand-tuned values with no derivation, kept
//! as named constants so they read as tunable parameters.

use crate::board::{Piece, Snapshot};
use crate::rules::{is_stall, MIN_CHICKENS, STALL_TARGET};

/// Terminal sentinels: a filled stall and a decimated flock
pub const STALL_WIN_SCORE: f32 = 1000.0;
pub const FLOCK_LOSS_SCORE: f32 = 0.0;

/// Material term: per living chicken and per chicken already home
pub const ALIVE_WEIGHT: f32 = 2.0;
pub const STALL_WEIGHT: f32 = 3.0;

/// Extra stall shaping applied on top of the base term
pub const STALL_BONUS: f32 = 0.5;

/// Flat penalty whenever any terminal fox jump exists
pub const DANGER_PENALTY: f32 = 5.0;

/// Cap on the per-jump danger deduction
pub const DANGER_CAP: u32 = 6;

/// Evaluate a position from the chickens' perspective.
///
/// The base term is the terminal sentinel when the game is decided,
/// otherwise a weighted sum of living chickens and chickens in the stall.
/// On top of that, stall progress earns a small bonus and exposure to
/// capture ("danger": the number of terminal fox jumps available) is
/// penalized both flatly and per jump, capped.
#[must_use]
pub fn evaluate(snap: &Snapshot) -> f32 {
    let mut alive = 0usize;
    let mut in_stall = 0usize;
    for (pos, piece) in snap.pieces() {
        if piece == Piece::Chicken {
            alive += 1;
            if is_stall(pos) {
                in_stall += 1;
            }
        }
    }

    let base = if alive < MIN_CHICKENS {
        FLOCK_LOSS_SCORE
    } else if in_stall == STALL_TARGET {
        STALL_WIN_SCORE
    } else {
        alive as f32 * ALIVE_WEIGHT + in_stall as f32 * STALL_WEIGHT
    };

    let danger = snap.terminal_fox_jump_count();
    let mut score = base + in_stall as f32 * STALL_BONUS;
    if danger > 0 {
        score -= DANGER_PENALTY;
    }
    score - danger.min(DANGER_CAP) as f32
}
