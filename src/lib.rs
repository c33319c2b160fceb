//! Fox and Hens game engine
//!
//! A turn-based capture game on a 33-cell cross-shaped board: thirteen
//! chickens march toward the stall at the far edge while two foxes try to
//! thin the flock by chain-capturing. Captures are mandatory for the fox,
//! and refusing one costs a fox.
//!
//! # Architecture
//!
//! - [`board`]: the cross geometry, the mutable game-of-record [`Board`],
//!   and the immutable [`Snapshot`] used by search
//! - [`rules`]: legal-move and capture-chain queries, the mutating
//!   operations, the unified [`rules::attempt_move`] entry point, and
//!   win/loss detection
//! - [`eval`]: the fixed hand-tuned position evaluation
//! - [`search`]: minimax with alpha-beta pruning over snapshot clones
//! - [`engine`]: [`AiPlayer`], the search facade with depth configuration
//!   and the anti-oscillation memory
//! - [`session`]: [`GameSession`], the driver that feeds local, remote and
//!   AI actions through the one rule-engine entry point
//!
//! # Quick Start
//!
//! ```
//! use foxhens::{AttemptOutcome, GameSession};
//!
//! let mut session = GameSession::with_ai_depth(2);
//!
//! // Chicken opens by stepping forward into the open center.
//! let report = session.try_action((3, 4), (3, 3)).unwrap();
//! assert_eq!(report.outcome, AttemptOutcome::Moved);
//!
//! // The fox side answers through the exact same path.
//! let report = session.ai_turn().unwrap();
//! assert_ne!(report.outcome, AttemptOutcome::Ignored);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, Side, Snapshot, GRID_SIZE, TOTAL_CELLS};
pub use engine::{AiPlayer, MoveReport};
pub use error::InvalidCoordinate;
pub use rules::{AttemptOutcome, AttemptReport, ChainTag, JumpOption, WinReason};
pub use search::{choose_move, ChosenMove};
pub use session::GameSession;
