//! Caller-side game driver
//!
//! [`GameSession`] owns the game of record and implements the caller
//! obligations the engine leaves outside the rules: every action — local
//! input, a remote peer's `{from, to}`, or the AI's choice — goes through
//! [`rules::attempt_move`] identically, and stalemate is probed through
//! the two all-side queries rather than detected by the engine.
//!
//! Presentation and transport collaborators read the board and the
//! returned reports; they never mutate the board directly.

use tracing::info;

use crate::board::{Board, Pos, Side};
use crate::engine::AiPlayer;
use crate::error::InvalidCoordinate;
use crate::rules::{self, AttemptReport, WinReason};

/// One match: the game of record plus the computer player
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    ai: AiPlayer,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            ai: AiPlayer::new(),
        }
    }

    pub fn with_ai_depth(depth: u8) -> Self {
        Self {
            board: Board::new(),
            ai: AiPlayer::with_depth(depth),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    #[inline]
    pub fn win_reason(&self) -> Option<WinReason> {
        self.board.win_reason()
    }

    /// Start the match over: canonical layout, cleared AI memory
    pub fn reset(&mut self) {
        self.board.reset();
        self.ai.clear_memory();
    }

    /// Feed one raw `{from, to}` action through the rule engine. Remote
    /// actions delivered by the transport take this exact path too.
    ///
    /// Off-cross coordinates are rejected with a typed error; everything
    /// else resolves to an [`AttemptReport`], including selections that
    /// do not belong to the side to move (ignored).
    pub fn try_action(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<AttemptReport, InvalidCoordinate> {
        let from = Pos::try_new(from.0, from.1)?;
        let to = Pos::try_new(to.0, to.1)?;
        Ok(self.attempt(from, to))
    }

    /// Let the computer take the current turn. Its choice is applied
    /// through the same path as a human action. Returns `None` when the
    /// game is over or the side to move has no candidate at all.
    pub fn ai_turn(&mut self) -> Option<AttemptReport> {
        if self.board.win_reason().is_some() {
            return None;
        }
        let side = self.board.side_to_move();
        let chosen = self.ai.choose(&self.board, side).best_move?;
        Some(self.attempt(chosen.from, chosen.to))
    }

    /// Whether the side to move has zero legal moves and zero legal jumps.
    /// The engine records no outcome for this; what a stalemate means is
    /// the embedder's ruling.
    pub fn is_stalemated(&self) -> bool {
        self.board.win_reason().is_none()
            && rules::all_legal_jumps_for_side(&self.board).is_empty()
            && rules::all_legal_moves_for_side(&self.board).is_empty()
    }

    fn attempt(&mut self, from: Pos, to: Pos) -> AttemptReport {
        if self.board.win_reason().is_some() {
            return AttemptReport::ignored();
        }
        if self.board.get(from).side() != Some(self.board.side_to_move()) {
            return AttemptReport::ignored();
        }

        let moves = rules::legal_moves(&self.board, from);
        let jumps = rules::legal_jumps(&self.board, from);
        let side_jumps = rules::all_legal_jumps_for_side(&self.board);
        let report = rules::attempt_move(&mut self.board, from, to, &moves, &jumps, &side_jumps);

        if let Some(reason) = self.board.win_reason() {
            info!(winner = ?reason.winner(), "game over: {reason}");
        }
        report
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
