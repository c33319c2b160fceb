//! Cross-shaped cell set and per-piece adjacency
//!
//! The board is a 7x7 index space with the four 2x2 corner blocks removed,
//! leaving a 33-cell cross. Diagonal connections exist only on cells of even
//! coordinate parity, matching the diagonal lines drawn on the physical
//! board.

use super::{Pos, GRID_SIZE, TOTAL_CELLS};

/// Always-available step candidates, in fixed order: left, right, up.
const ORTHOGONAL: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, -1)];

/// Downward step, excluded for chickens (they never move backward).
const DOWN: (i32, i32) = (0, 1);

/// Diagonal candidates, gated on coordinate parity.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Upper bound on adjacency candidates from a single cell
pub const MAX_DIRECTIONS: usize = 8;

/// Number of playable cells on the cross
pub const PLAYABLE_CELLS: usize = 33;

/// A cell is playable unless it falls in one of the four 2x2 corner blocks.
#[inline]
pub const fn is_playable(x: i32, y: i32) -> bool {
    if x < 0 || y < 0 || x >= GRID_SIZE as i32 || y >= GRID_SIZE as i32 {
        return false;
    }
    !((x <= 1 || x >= 5) && (y <= 1 || y >= 5))
}

/// Playability of each slot in the 49-slot row-major index space.
pub const PLAYABLE: [bool; TOTAL_CELLS] = playable_mask();

const fn playable_mask() -> [bool; TOTAL_CELLS] {
    let mut mask = [false; TOTAL_CELLS];
    let mut i = 0;
    while i < TOTAL_CELLS {
        mask[i] = is_playable((i % GRID_SIZE) as i32, (i / GRID_SIZE) as i32);
        i += 1;
    }
    mask
}

/// Adjacency directions from `at`, in fixed candidate order.
///
/// With `orthogonal_only` (a chicken's step rule) only left/right/up apply.
/// Otherwise down is added, plus the four diagonals when `(x + y)` is even.
///
/// Returns a fixed buffer and the number of valid entries, so hot callers
/// never allocate.
#[inline]
pub fn directions(at: Pos, orthogonal_only: bool) -> ([(i32, i32); MAX_DIRECTIONS], usize) {
    let mut dirs = [(0, 0); MAX_DIRECTIONS];
    dirs[..3].copy_from_slice(&ORTHOGONAL);
    let mut n = 3;
    if !orthogonal_only {
        dirs[n] = DOWN;
        n += 1;
        if (at.x + at.y) % 2 == 0 {
            dirs[n..n + 4].copy_from_slice(&DIAGONALS);
            n += 4;
        }
    }
    (dirs, n)
}

/// Playable neighbors of `at` under the given adjacency rule, in fixed order.
pub fn neighbors(at: Pos, orthogonal_only: bool) -> Vec<Pos> {
    let (dirs, n) = directions(at, orthogonal_only);
    let mut out = Vec::with_capacity(n);
    for &(dx, dy) in &dirs[..n] {
        let (nx, ny) = (at.x as i32 + dx, at.y as i32 + dy);
        if is_playable(nx, ny) {
            out.push(Pos::new(nx as u8, ny as u8));
        }
    }
    out
}
