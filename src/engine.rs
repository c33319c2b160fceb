//! AI player facade around the search
//!
//! [`AiPlayer`] wraps [`crate::search`] with a configured depth, timing and
//! node statistics, and the anti-oscillation memory: the fingerprints of
//! the last two positions its own moves produced, handed back to the
//! search root on the next call.

use std::collections::VecDeque;
use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Side, Snapshot};
use crate::rules;
use crate::search::{self, ChosenMove, OSCILLATION_WINDOW};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Result of one [`AiPlayer::choose`] call
#[derive(Debug, Clone)]
pub struct MoveReport {
    /// Best move found, if the side to move has any candidate
    pub best_move: Option<ChosenMove>,
    /// Evaluation of the chosen line, chicken perspective
    pub score: f32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Positions visited
    pub nodes: u64,
}

/// A computer player for either side
#[derive(Debug, Clone)]
pub struct AiPlayer {
    depth: u8,
    recent: VecDeque<u128>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            recent: VecDeque::with_capacity(OSCILLATION_WINDOW),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a move for `side` on the given board. The caller applies the
    /// returned pair through the rule engine exactly like a human action;
    /// the position that application will produce is remembered for the
    /// anti-oscillation window.
    pub fn choose(&mut self, board: &Board, side: Side) -> MoveReport {
        let start = Instant::now();
        let recent: Vec<u128> = self.recent.iter().copied().collect();
        let result = search::search(board, self.depth, side, &recent);
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(chosen) = result.best_move {
            self.remember(resulting_fingerprint(board, chosen));
        }
        debug!(
            nodes = result.nodes,
            time_ms,
            score = result.score,
            "search finished"
        );

        MoveReport {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }

    /// Forget the recorded positions (for a match reset)
    pub fn clear_memory(&mut self) {
        self.recent.clear();
    }

    fn remember(&mut self, fingerprint: u128) {
        if self.recent.len() == OSCILLATION_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(fingerprint);
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fingerprint of the position the chosen move produces, computed on a
/// scratch copy of the board through the same rule-engine operations the
/// caller will use.
fn resulting_fingerprint(board: &Board, chosen: ChosenMove) -> u128 {
    let mut scratch = board.clone();
    let jumps = rules::legal_jumps(&scratch, chosen.from);
    if let Some(jump) = jumps
        .iter()
        .find(|j| j.is_terminal() && j.landing == chosen.to)
    {
        rules::apply_jump(&mut scratch, jump);
    } else {
        rules::apply_move(&mut scratch, chosen.from, chosen.to);
    }
    Snapshot::from_board(&scratch).fingerprint()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};

    #[test]
    fn test_default_configuration() {
        let player = AiPlayer::new();
        assert_eq!(player.depth(), DEFAULT_DEPTH);
        assert!(player.recent.is_empty());
    }

    #[test]
    fn test_memory_keeps_last_two_positions() {
        let mut player = AiPlayer::with_depth(1);
        let mut board = Board::new();

        for _ in 0..3 {
            let report = player.choose(&board, board.side_to_move());
            let chosen = report.best_move.unwrap();
            let jumps = rules::legal_jumps(&board, chosen.from);
            if let Some(jump) = jumps
                .iter()
                .find(|j| j.is_terminal() && j.landing == chosen.to)
                .cloned()
            {
                rules::apply_jump(&mut board, &jump);
            } else {
                rules::apply_move(&mut board, chosen.from, chosen.to);
            }
        }
        assert_eq!(player.recent.len(), OSCILLATION_WINDOW);

        player.clear_memory();
        assert!(player.recent.is_empty());
    }

    #[test]
    fn test_choose_reports_statistics() {
        let mut player = AiPlayer::with_depth(2);
        let report = player.choose(&Board::new(), Side::Chicken);
        assert!(report.best_move.is_some());
        assert!(report.nodes > 1);
    }

    #[test]
    fn test_remembered_fingerprint_matches_applied_move() {
        let mut player = AiPlayer::with_depth(1);
        let mut board = Board::new();

        let chosen = player.choose(&board, Side::Chicken).best_move.unwrap();
        rules::apply_move(&mut board, chosen.from, chosen.to);

        assert_eq!(
            player.recent.back().copied(),
            Some(Snapshot::from_board(&board).fingerprint())
        );
    }

    #[test]
    fn test_jump_fingerprint_uses_whole_chain() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 4), Piece::Fox);
        board.set(Pos::new(3, 3), Piece::Chicken);
        board.set(Pos::new(2, 2), Piece::Chicken);
        board.set_side(Side::Fox);

        let mut player = AiPlayer::with_depth(1);
        let chosen = player.choose(&board, Side::Fox).best_move.unwrap();
        assert_eq!(chosen.to, Pos::new(1, 2));

        let jumps = rules::legal_jumps(&board, chosen.from);
        let jump = jumps
            .iter()
            .find(|j| j.is_terminal() && j.landing == chosen.to)
            .unwrap();
        let mut applied = board.clone();
        rules::apply_jump(&mut applied, jump);

        assert_eq!(
            player.recent.back().copied(),
            Some(Snapshot::from_board(&applied).fingerprint())
        );
    }
}
