//! The [`Cell`] type — one maze position with its search scores.

use crate::geom::Point;

/// Score sentinel meaning "not reached yet".
///
/// Far above any path length on a supported grid, and `SCORE_INFINITY + 1`
/// does not overflow.
pub const SCORE_INFINITY: i32 = i32::MAX / 2;

/// `heap_index` value of a cell that is not resident in a priority queue.
pub const NOT_IN_HEAP: usize = usize::MAX;

/// A single maze cell.
///
/// `g`, `h` and `heap_index` are only meaningful to the A* search; every
/// other consumer ignores them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub obstacle: bool,
    /// Cost so far from the start.
    pub g: i32,
    /// Priority score: `g` plus the Manhattan estimate to the end.
    pub h: i32,
    /// Position inside the priority queue, or [`NOT_IN_HEAP`].
    pub heap_index: usize,
}

impl Cell {
    /// A free cell at `pos` with unset scores.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            obstacle: false,
            g: SCORE_INFINITY,
            h: SCORE_INFINITY,
            heap_index: NOT_IN_HEAP,
        }
    }

    /// Coordinate equality; obstacle flag and scores do not participate.
    #[inline]
    pub fn same_position(&self, other: &Cell) -> bool {
        self.pos == other.pos
    }

    /// Whether the cell currently sits in a priority queue.
    #[inline]
    pub fn in_heap(&self) -> bool {
        self.heap_index != NOT_IN_HEAP
    }

    /// Put `g`, `h` and `heap_index` back to their sentinels.
    #[inline]
    pub fn reset_scores(&mut self) {
        self.g = SCORE_INFINITY;
        self.h = SCORE_INFINITY;
        self.heap_index = NOT_IN_HEAP;
    }
}
