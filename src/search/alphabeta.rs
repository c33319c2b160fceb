//! Minimax with alpha-beta pruning over immutable snapshots
//!
//! The searcher never touches the live board: it takes one [`Snapshot`]
//! per call and clones it once per explored branch, so a branch is undone
//! by simply discarding its clone. The chicken side maximizes the
//! evaluation, the fox side minimizes it, and mandatory capture is
//! enforced inside the search exactly as the rule engine enforces it at
//! the surface: whenever any terminal jump exists for the fox, those
//! jumps are the only candidates.
//!
//! Candidate enumeration is row-major over source cells and fixed
//! adjacency order per cell, and value ties keep the first-encountered
//! candidate, so results are fully deterministic.

use crate::board::snapshot::JumpPath;
use crate::board::{Board, Pos, Side, Snapshot};
use crate::eval::evaluate;

/// How many recent fingerprints the root anti-oscillation filter honors
pub const OSCILLATION_WINDOW: usize = 2;

/// The move selected by a search: for a jump, `to` is the final landing
/// cell of the chosen terminal chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Pos,
    pub to: Pos,
}

/// Search result with the chosen move and basic statistics
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if the side to move has any candidate
    pub best_move: Option<ChosenMove>,
    /// Evaluation of the chosen line, chicken perspective
    pub score: f32,
    /// Positions visited
    pub nodes: u64,
}

/// One explorable action at a node
enum Candidate {
    Step(Pos, Pos),
    Jump(JumpPath),
}

impl Candidate {
    fn chosen(&self) -> ChosenMove {
        match self {
            Candidate::Step(from, to) => ChosenMove {
                from: *from,
                to: *to,
            },
            Candidate::Jump(path) => ChosenMove {
                from: path.from,
                to: path.landing,
            },
        }
    }

    fn apply(&self, snap: &mut Snapshot) {
        match self {
            Candidate::Step(from, to) => snap.apply_step(*from, *to),
            Candidate::Jump(path) => snap.apply_jump(path),
        }
    }
}

/// Candidates for `side` in this position. For the fox, any available
/// terminal jump preempts all step moves; for the chicken only steps
/// exist. An empty result means the node is evaluated as a leaf.
fn candidates_for(snap: &Snapshot, side: Side) -> Vec<Candidate> {
    if side == Side::Fox {
        let mut jumps = Vec::new();
        snap.terminal_fox_jumps(&mut jumps);
        if !jumps.is_empty() {
            return jumps.into_iter().map(Candidate::Jump).collect();
        }
    }
    let mut steps = Vec::new();
    snap.step_moves(side, &mut steps);
    steps
        .into_iter()
        .map(|(from, to)| Candidate::Step(from, to))
        .collect()
}

fn minimax(snap: &Snapshot, depth: u8, side: Side, mut alpha: f32, mut beta: f32, nodes: &mut u64) -> f32 {
    *nodes += 1;
    if depth == 0 {
        return evaluate(snap);
    }
    let candidates = candidates_for(snap, side);
    if candidates.is_empty() {
        return evaluate(snap);
    }

    match side {
        Side::Chicken => {
            let mut best = f32::NEG_INFINITY;
            for candidate in &candidates {
                let mut child = snap.clone();
                candidate.apply(&mut child);
                let value = minimax(&child, depth - 1, Side::Fox, alpha, beta, nodes);
                if value > best {
                    best = value;
                }
                if best > alpha {
                    alpha = best;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        }
        Side::Fox => {
            let mut best = f32::INFINITY;
            for candidate in &candidates {
                let mut child = snap.clone();
                candidate.apply(&mut child);
                let value = minimax(&child, depth - 1, Side::Chicken, alpha, beta, nodes);
                if value < best {
                    best = value;
                }
                if best < beta {
                    beta = best;
                }
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Full search from a live board: pure in the board, `depth` plies deep.
///
/// `recent` is the caller-owned anti-oscillation memory. At the root only,
/// and only for the chicken side, candidates whose resulting fingerprint
/// matches one of the last [`OSCILLATION_WINDOW`] entries are excluded —
/// unless that would exclude every candidate, in which case the filter is
/// dropped entirely.
pub fn search(board: &Board, depth: u8, side: Side, recent: &[u128]) -> SearchResult {
    let root = Snapshot::from_board(board);
    let mut nodes: u64 = 1;

    let candidates = candidates_for(&root, side);
    if candidates.is_empty() {
        return SearchResult {
            best_move: None,
            score: evaluate(&root),
            nodes,
        };
    }

    let window_start = recent.len().saturating_sub(OSCILLATION_WINDOW);
    let window = &recent[window_start..];
    let keep: Vec<bool> = candidates
        .iter()
        .map(|candidate| {
            if side != Side::Chicken || window.is_empty() {
                return true;
            }
            let mut child = root.clone();
            candidate.apply(&mut child);
            !window.contains(&child.fingerprint())
        })
        .collect();
    let drop_filter = !keep.iter().any(|&k| k);

    let child_depth = depth.saturating_sub(1);
    let mut alpha = f32::NEG_INFINITY;
    let mut beta = f32::INFINITY;
    let mut best: Option<(ChosenMove, f32)> = None;

    for (candidate, &kept) in candidates.iter().zip(&keep) {
        if !kept && !drop_filter {
            continue;
        }
        let mut child = root.clone();
        candidate.apply(&mut child);
        let value = minimax(&child, child_depth, side.opponent(), alpha, beta, &mut nodes);
        match side {
            Side::Chicken => {
                if best.is_none() || value > best.unwrap().1 {
                    best = Some((candidate.chosen(), value));
                }
                if value > alpha {
                    alpha = value;
                }
            }
            Side::Fox => {
                if best.is_none() || value < best.unwrap().1 {
                    best = Some((candidate.chosen(), value));
                }
                if value < beta {
                    beta = value;
                }
            }
        }
    }

    let (best_move, score) = best.map_or((None, evaluate(&root)), |(m, s)| (Some(m), s));
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Pick a move for `side`, `depth` plies deep. The returned pair is meant
/// to be applied through the rule engine exactly like a human action.
pub fn choose_move(board: &Board, depth: u8, side: Side, recent: &[u128]) -> Option<ChosenMove> {
    search(board, depth, side, recent).best_move
}
