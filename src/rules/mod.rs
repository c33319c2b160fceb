//! Game rules for Fox and Hens
//!
//! This module implements the full rule set:
//! - Legal step moves and recursive capture-chain enumeration
//! - The mandatory-capture rule and its punishment semantics
//! - Win and loss detection (stall occupation, flock size, fox survival)

pub mod apply;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use apply::{
    apply_jump, apply_move, apply_punishment, attempt_move, AttemptOutcome, AttemptReport,
};
pub use moves::{
    all_legal_jumps_for_side, all_legal_moves_for_side, legal_jumps, legal_moves, ChainTag,
    JumpOption,
};
pub use win::{is_stall, WinReason, MIN_CHICKENS, STALL_TARGET};
