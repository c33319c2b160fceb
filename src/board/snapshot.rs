//! Immutable fixed-size board snapshot for search
//!
//! Search never touches the live [`Board`]: it takes one snapshot per call
//! and clones it once per explored branch. Cloning is a flat 49-slot array
//! copy, which is the only form of "undo" the search needs. The step and
//! jump semantics of [`crate::rules`] are duplicated here against the flat
//! representation so the hot path stays allocation-light.

use super::{geometry, Board, Piece, Pos, Side, TOTAL_CELLS};

/// A terminal capture chain found on a snapshot: the jumping fox's origin,
/// its final landing cell, and every captured cell in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPath {
    pub from: Pos,
    pub landing: Pos,
    pub captured: Vec<Pos>,
}

/// Immutable board contents: 49 row-major slots paired with the playability
/// mask in [`geometry::PLAYABLE`]. Never mutated after creation except
/// through the search's own clone-then-apply discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: [Piece; TOTAL_CELLS],
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            cells: *board.cells(),
        }
    }

    #[inline]
    pub fn get(&self, at: Pos) -> Piece {
        debug_assert!(geometry::PLAYABLE[at.to_index()]);
        self.cells[at.to_index()]
    }

    /// All playable cells with their contents, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        (0..TOTAL_CELLS)
            .filter(|&i| geometry::PLAYABLE[i])
            .map(move |i| (Pos::from_index(i), self.cells[i]))
    }

    /// Canonical serialization of the cell contents: two bits per slot in
    /// fixed index order. Two boards with identical piece placement always
    /// produce equal fingerprints, regardless of how they were reached.
    pub fn fingerprint(&self) -> u128 {
        let mut key = 0u128;
        for (i, &cell) in self.cells.iter().enumerate() {
            let code = match cell {
                Piece::Empty => 0u128,
                Piece::Fox => 1,
                Piece::Chicken => 2,
            };
            key |= code << (2 * i);
        }
        key
    }

    /// Collect every legal step move for `side`, row-major over source
    /// cells then fixed adjacency order.
    pub fn step_moves(&self, side: Side, out: &mut Vec<(Pos, Pos)>) {
        let piece = side.piece();
        let ortho = side.orthogonal_only();
        for i in 0..TOTAL_CELLS {
            if !geometry::PLAYABLE[i] || self.cells[i] != piece {
                continue;
            }
            let from = Pos::from_index(i);
            let (dirs, n) = geometry::directions(from, ortho);
            for &(dx, dy) in &dirs[..n] {
                let (tx, ty) = (from.x as i32 + dx, from.y as i32 + dy);
                if geometry::is_playable(tx, ty) {
                    let to = Pos::new(tx as u8, ty as u8);
                    if self.cells[to.to_index()] == Piece::Empty {
                        out.push((from, to));
                    }
                }
            }
        }
    }

    /// Collect every terminal capture chain available to the foxes.
    pub fn terminal_fox_jumps(&self, out: &mut Vec<JumpPath>) {
        self.for_each_terminal_jump(&mut |from, landing, captured| {
            out.push(JumpPath {
                from,
                landing,
                captured: captured.to_vec(),
            });
        });
    }

    /// Number of terminal fox jumps in this position (the "danger" input to
    /// the evaluation), without materializing the chains.
    pub fn terminal_fox_jump_count(&self) -> u32 {
        let mut count = 0;
        self.for_each_terminal_jump(&mut |_, _, _| count += 1);
        count
    }

    fn for_each_terminal_jump(&self, sink: &mut dyn FnMut(Pos, Pos, &[Pos])) {
        for i in 0..TOTAL_CELLS {
            if !geometry::PLAYABLE[i] || self.cells[i] != Piece::Fox {
                continue;
            }
            let origin = Pos::from_index(i);
            let mut scratch = self.cells;
            scratch[i] = Piece::Empty;
            let mut captured = Vec::new();
            terminal_chains(&scratch, origin, origin, &mut captured, sink);
        }
    }

    /// Relocate a piece (search-side counterpart of a step move)
    pub fn apply_step(&mut self, from: Pos, to: Pos) {
        let piece = self.cells[from.to_index()];
        self.cells[from.to_index()] = Piece::Empty;
        self.cells[to.to_index()] = piece;
    }

    /// Remove every captured cell and relocate the jumping fox
    pub fn apply_jump(&mut self, path: &JumpPath) {
        let piece = self.cells[path.from.to_index()];
        for &captured in &path.captured {
            self.cells[captured.to_index()] = Piece::Empty;
        }
        self.cells[path.from.to_index()] = Piece::Empty;
        self.cells[path.landing.to_index()] = piece;
    }
}

/// Depth-first chain extension over a scratch cell array with the jumping
/// fox already lifted off the board. Emits only chains that cannot be
/// extended further; `captured` is the running capture list.
fn terminal_chains(
    cells: &[Piece; TOTAL_CELLS],
    origin: Pos,
    current: Pos,
    captured: &mut Vec<Pos>,
    sink: &mut dyn FnMut(Pos, Pos, &[Pos]),
) {
    let mut extended = false;
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
            extended = true;
            let mut next = *cells;
            next[mid.to_index()] = Piece::Empty;
            captured.push(mid);
            terminal_chains(&next, origin, landing, captured, sink);
            captured.pop();
        }
    }
    if !extended && !captured.is_empty() {
        sink(origin, current, captured);
    }
}
