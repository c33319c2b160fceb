//! Mutable game-of-record board

use super::{geometry, Piece, Pos, Side, GRID_SIZE, TOTAL_CELLS};
use crate::rules::WinReason;

/// Rows fully occupied by chickens in the canonical starting layout
const CHICKEN_START_ROWS: std::ops::RangeInclusive<u8> = 4..=6;

/// Fox starting cells: the central pair of the row just above the flock
const FOX_START: [Pos; 2] = [Pos { x: 2, y: 3 }, Pos { x: 4, y: 3 }];

/// Game-of-record board: cell contents, side to move, and the recorded
/// terminal outcome. Created once per match and mutated in place by the
/// rule-engine operations in [`crate::rules`].
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Piece; TOTAL_CELLS],
    side_to_move: Side,
    outcome: Option<WinReason>,
}

impl Board {
    /// Board in the canonical starting layout, Chicken to move
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Piece::Empty; TOTAL_CELLS],
            side_to_move: Side::Chicken,
            outcome: None,
        };
        board.reset();
        board
    }

    /// Restore the canonical starting layout: every playable cell of the
    /// three rows nearest the chickens' home edge holds a Chicken, the two
    /// foxes sit on the central pair of the row above, everything else is
    /// empty. Chicken moves first; any recorded outcome is cleared.
    pub fn reset(&mut self) {
        self.cells = [Piece::Empty; TOTAL_CELLS];
        for y in CHICKEN_START_ROWS {
            for x in 0..GRID_SIZE as u8 {
                if geometry::is_playable(x as i32, y as i32) {
                    self.cells[Pos::new(x, y).to_index()] = Piece::Chicken;
                }
            }
        }
        for fox in FOX_START {
            self.cells[fox.to_index()] = Piece::Fox;
        }
        self.side_to_move = Side::Chicken;
        self.outcome = None;
    }

    /// Contents of a playable cell. Panics on an off-cross coordinate,
    /// which is a caller bug rather than a rule violation.
    #[inline]
    pub fn get(&self, at: Pos) -> Piece {
        assert!(
            geometry::is_playable(at.x as i32, at.y as i32),
            "cell ({}, {}) is not on the playable cross",
            at.x,
            at.y
        );
        self.cells[at.to_index()]
    }

    /// Place a piece on a playable cell. Panics on an off-cross coordinate.
    #[inline]
    pub fn set(&mut self, at: Pos, piece: Piece) {
        assert!(
            geometry::is_playable(at.x as i32, at.y as i32),
            "cell ({}, {}) is not on the playable cross",
            at.x,
            at.y
        );
        self.cells[at.to_index()] = piece;
    }

    /// Empty a cell
    #[inline]
    pub fn remove(&mut self, at: Pos) {
        self.set(at, Piece::Empty);
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// The recorded terminal outcome, if any win or loss has been reached
    #[inline]
    pub fn win_reason(&self) -> Option<WinReason> {
        self.outcome
    }

    /// All playable cells with their contents, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        (0..TOTAL_CELLS)
            .filter(|&i| geometry::PLAYABLE[i])
            .map(move |i| (Pos::from_index(i), self.cells[i]))
    }

    /// Number of cells holding the given piece kind
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        self.pieces().filter(|&(_, p)| p != Piece::Empty).count()
    }

    pub(crate) fn cells(&self) -> &[Piece; TOTAL_CELLS] {
        &self.cells
    }

    pub(crate) fn flip_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    pub(crate) fn record_outcome(&mut self, reason: WinReason) {
        self.outcome = Some(reason);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Board {
    /// Empty board for rule tests
    pub(crate) fn cleared() -> Self {
        Self {
            cells: [Piece::Empty; TOTAL_CELLS],
            side_to_move: Side::Chicken,
            outcome: None,
        }
    }

    pub(crate) fn set_side(&mut self, side: Side) {
        self.side_to_move = side;
    }
}
