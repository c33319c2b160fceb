//! Board representation for Fox and Hens

pub mod board;
pub mod geometry;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use snapshot::Snapshot;

use crate::error::InvalidCoordinate;

/// Side length of the square index space (the playable cross is cut out of it)
pub const GRID_SIZE: usize = 7;
/// Total slots in the row-major index space; only 33 of them are playable
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 49

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Fox,
    Chicken,
}

impl Piece {
    /// Side a piece belongs to, if any
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Fox => Some(Side::Fox),
            Piece::Chicken => Some(Side::Chicken),
            Piece::Empty => None,
        }
    }
}

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Fox,
    Chicken,
}

impl Side {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Fox => Side::Chicken,
            Side::Chicken => Side::Fox,
        }
    }

    /// The piece kind this side plays
    #[inline]
    pub fn piece(self) -> Piece {
        match self {
            Side::Fox => Piece::Fox,
            Side::Chicken => Piece::Chicken,
        }
    }

    /// Chickens step orthogonally and never backward; foxes use the full
    /// adjacency rule (down plus diagonals on even-parity cells).
    #[inline]
    pub fn orthogonal_only(self) -> bool {
        self == Side::Chicken
    }
}

/// Position on the board. `y` grows toward the chickens' starting edge,
/// so chickens advance in the `-y` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < GRID_SIZE as u8 && y < GRID_SIZE as u8);
        Self { x, y }
    }

    /// Promote a raw coordinate, rejecting anything off the playable cross.
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Result<Self, InvalidCoordinate> {
        if geometry::is_playable(x, y) {
            Ok(Self::new(x as u8, y as u8))
        } else {
            Err(InvalidCoordinate { x, y })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % GRID_SIZE) as u8,
            y: (idx / GRID_SIZE) as u8,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
