//! Legal step and capture-chain queries
//!
//! Queries never mutate the board. Chain enumeration works on a scratch
//! copy of the cells with the jumping fox lifted off and each captured
//! chicken removed as the chain grows, so chained captures are discovered
//! without touching the game of record.

use crate::board::{geometry, Board, Piece, Pos, Side, TOTAL_CELLS};

/// Whether a capture sequence is a legal stopping point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainTag {
    /// A further capture is available from the landing cell; stopping here
    /// is punished
    Continuable,
    /// No further capture exists; the only legal way to end a turn by
    /// capturing
    Terminal,
}

/// One candidate capture sequence: where the fox starts, where it stops,
/// and every captured cell in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpOption {
    pub origin: Pos,
    pub landing: Pos,
    pub captured: Vec<Pos>,
    pub tag: ChainTag,
}

impl JumpOption {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.tag == ChainTag::Terminal
    }
}

/// Empty adjacent cells the piece at `at` may step to, under its own
/// adjacency rule. Empty if the cell holds no piece.
pub fn legal_moves(board: &Board, at: Pos) -> Vec<Pos> {
    let Some(side) = board.get(at).side() else {
        return Vec::new();
    };
    geometry::neighbors(at, side.orthogonal_only())
        .into_iter()
        .filter(|&to| board.get(to) == Piece::Empty)
        .collect()
}

/// Every capture sequence starting at `at`, with every reachable stopping
/// point emitted once. Chickens never capture, so their jump set is empty.
///
/// A sequence is tagged [`ChainTag::Terminal`] when no further capture is
/// possible from its landing cell, and [`ChainTag::Continuable`] otherwise.
/// Continuable entries are not applyable; they exist so
/// [`super::attempt_move`] can recognize an attempt to stop mid-chain.
pub fn legal_jumps(board: &Board, at: Pos) -> Vec<JumpOption> {
    if board.get(at) != Piece::Fox {
        return Vec::new();
    }
    let mut scratch = *board.cells();
    scratch[at.to_index()] = Piece::Empty;
    let mut out = Vec::new();
    let mut captured = Vec::new();
    chain_options(&scratch, at, at, &mut captured, &mut out);
    out
}

/// Capture steps available from `current`: (captured cell, landing cell)
/// pairs in fixed adjacency order. A step exists when an adjacent cell
/// holds a chicken and the cell one further in the same direction is
/// playable and empty.
fn capture_steps(cells: &[Piece; TOTAL_CELLS], current: Pos) -> Vec<(Pos, Pos)> {
    let mut steps = Vec::new();
    let (dirs, n) = geometry::directions(current, false);
    for &(dx, dy) in &dirs[..n] {
        let (mx, my) = (current.x as i32 + dx, current.y as i32 + dy);
        let (lx, ly) = (current.x as i32 + 2 * dx, current.y as i32 + 2 * dy);
        if !geometry::is_playable(mx, my) || !geometry::is_playable(lx, ly) {
            continue;
        }
        let mid = Pos::new(mx as u8, my as u8);
        let landing = Pos::new(lx as u8, ly as u8);
        if cells[mid.to_index()] == Piece::Chicken && cells[landing.to_index()] == Piece::Empty {
            steps.push((mid, landing));
        }
    }
    steps
}

fn chain_options(
    cells: &[Piece; TOTAL_CELLS],
    origin: Pos,
    current: Pos,
    captured: &mut Vec<Pos>,
    out: &mut Vec<JumpOption>,
) {
    let steps = capture_steps(cells, current);
    if !captured.is_empty() {
        let tag = if steps.is_empty() {
            ChainTag::Terminal
        } else {
            ChainTag::Continuable
        };
        out.push(JumpOption {
            origin,
            landing: current,
            captured: captured.clone(),
            tag,
        });
    }
    for (mid, landing) in steps {
        let mut next = *cells;
        next[mid.to_index()] = Piece::Empty;
        captured.push(mid);
        chain_options(&next, origin, landing, captured, out);
        captured.pop();
    }
}

/// Union of [`legal_moves`] over every piece belonging to the side to
/// move, as (from, to) pairs in row-major source order.
pub fn all_legal_moves_for_side(board: &Board) -> Vec<(Pos, Pos)> {
    let piece = board.side_to_move().piece();
    let mut out = Vec::new();
    for (from, cell) in board.pieces() {
        if cell == piece {
            for to in legal_moves(board, from) {
                out.push((from, to));
            }
        }
    }
    out
}

/// Union of [`legal_jumps`] over every piece belonging to the side to
/// move. Always empty when Chicken is to move.
pub fn all_legal_jumps_for_side(board: &Board) -> Vec<JumpOption> {
    if board.side_to_move() == Side::Chicken {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (from, cell) in board.pieces() {
        if cell == Piece::Fox {
            out.extend(legal_jumps(board, from));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chicken_moves_left_right_up_only() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 3), Piece::Chicken);

        let moves = legal_moves(&board, Pos::new(3, 3));
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(4, 3), Pos::new(3, 2)]
        );
        assert!(!moves.contains(&Pos::new(3, 4)));
        assert!(!moves.contains(&Pos::new(2, 2)));
        assert!(!moves.contains(&Pos::new(4, 4)));
    }

    #[test]
    fn test_occupied_cells_are_not_move_targets() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 3), Piece::Chicken);
        board.set(Pos::new(3, 2), Piece::Fox);

        let moves = legal_moves(&board, Pos::new(3, 3));
        assert_eq!(moves, vec![Pos::new(2, 3), Pos::new(4, 3)]);
    }

    #[test]
    fn test_empty_cell_has_no_moves() {
        let board = Board::cleared();
        assert!(legal_moves(&board, Pos::new(3, 3)).is_empty());
    }

    #[test]
    fn test_single_capture_is_terminal() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 3), Piece::Fox);
        board.set(Pos::new(3, 2), Piece::Chicken);

        let jumps = legal_jumps(&board, Pos::new(3, 3));
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].tag, ChainTag::Terminal);
        assert_eq!(jumps[0].origin, Pos::new(3, 3));
        assert_eq!(jumps[0].landing, Pos::new(3, 1));
        assert_eq!(jumps[0].captured, vec![Pos::new(3, 2)]);
    }

    #[test]
    fn test_chain_emits_continuable_stop_and_terminal_end() {
        // Fox at (3, 4) jumps up over (3, 3) to (3, 2); from there a second
        // capture over (2, 2) to (1, 2) is available, so (3, 2) is only a
        // continuable stop.
        let mut board = Board::cleared();
        board.set(Pos::new(3, 4), Piece::Fox);
        board.set(Pos::new(3, 3), Piece::Chicken);
        board.set(Pos::new(2, 2), Piece::Chicken);

        let jumps = legal_jumps(&board, Pos::new(3, 4));
        assert_eq!(jumps.len(), 2);

        assert_eq!(jumps[0].landing, Pos::new(3, 2));
        assert_eq!(jumps[0].tag, ChainTag::Continuable);
        assert_eq!(jumps[0].captured, vec![Pos::new(3, 3)]);

        assert_eq!(jumps[1].landing, Pos::new(1, 2));
        assert_eq!(jumps[1].tag, ChainTag::Terminal);
        assert_eq!(jumps[1].captured, vec![Pos::new(3, 3), Pos::new(2, 2)]);
    }

    #[test]
    fn test_chickens_never_jump() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 3), Piece::Chicken);
        board.set(Pos::new(3, 2), Piece::Fox);
        assert!(legal_jumps(&board, Pos::new(3, 3)).is_empty());
    }

    #[test]
    fn test_no_jump_without_landing_room() {
        // Chicken adjacent but the cell beyond is occupied.
        let mut board = Board::cleared();
        board.set(Pos::new(3, 3), Piece::Fox);
        board.set(Pos::new(3, 2), Piece::Chicken);
        board.set(Pos::new(3, 1), Piece::Chicken);
        let jumps = legal_jumps(&board, Pos::new(3, 3));
        assert!(jumps.iter().all(|j| j.captured != vec![Pos::new(3, 2)]));
    }

    #[test]
    fn test_no_diagonal_jump_from_odd_parity_cell() {
        // (3, 2) has odd parity, so the diagonal chicken is not capturable.
        let mut board = Board::cleared();
        board.set(Pos::new(3, 2), Piece::Fox);
        board.set(Pos::new(4, 3), Piece::Chicken);
        assert!(legal_jumps(&board, Pos::new(3, 2)).is_empty());
    }

    #[test]
    fn test_side_unions_follow_side_to_move() {
        let mut board = Board::cleared();
        board.set(Pos::new(3, 1), Piece::Chicken);
        board.set(Pos::new(3, 5), Piece::Fox);
        board.set(Pos::new(3, 4), Piece::Chicken);

        // Chicken to move: steps for chickens only, never any jumps.
        let moves = all_legal_moves_for_side(&board);
        assert!(moves.iter().all(|&(from, _)| board.get(from) == Piece::Chicken));
        assert!(all_legal_jumps_for_side(&board).is_empty());

        // Fox to move: its capture over (3, 4) appears in the union.
        board.set_side(Side::Fox);
        let jumps = all_legal_jumps_for_side(&board);
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].origin, Pos::new(3, 5));
    }

    #[test]
    fn test_start_position_chicken_step_count() {
        let board = Board::new();
        // Only the front-row chickens flanking the foxes can step: each of
        // (0..=1, 4) and (5..=6, 4) has the single empty forward cell, and
        // (3, 4) can step into the empty center.
        let moves = all_legal_moves_for_side(&board);
        assert_eq!(
            moves,
            vec![
                (Pos::new(0, 4), Pos::new(0, 3)),
                (Pos::new(1, 4), Pos::new(1, 3)),
                (Pos::new(3, 4), Pos::new(3, 3)),
                (Pos::new(5, 4), Pos::new(5, 3)),
                (Pos::new(6, 4), Pos::new(6, 3)),
            ]
        );
    }
}
