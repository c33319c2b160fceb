//! Typed errors for boundary input validation.
//!
//! Game-rule violations are never errors: they resolve to
//! [`crate::rules::AttemptOutcome`] values. This error exists for raw
//! coordinates arriving from outside the engine (remote peers, UI hit
//! testing) before they are promoted to [`crate::board::Pos`].

use thiserror::Error;

/// A coordinate outside the playable cross was handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate ({x}, {y}) is outside the playable cross")]
pub struct InvalidCoordinate {
    pub x: i32,
    pub y: i32,
}
