//! Indexed binary min-heap over grid cells.
//!
//! Entries are coordinates; the key of an entry is the `h` score of its
//! grid cell. Each resident cell's `heap_index` is kept equal to its slot
//! in the heap on every swap, so [`IndexedHeap::update`] can re-sift a
//! cell in O(log n) after its score changed, without searching for it.

use maze_core::{Grid, NOT_IN_HEAP, Point};

use crate::frontier::Frontier;

/// Priority-queue frontier used by the A* search.
///
/// A cell is resident at most once. Heap invariant: for every non-root
/// slot `i`, `key(parent(i)) <= key(i)`.
#[derive(Debug, Clone, Default)]
pub struct IndexedHeap {
    entries: Vec<Point>,
}

impl IndexedHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The point with the smallest key, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<Point> {
        self.entries.first().copied()
    }

    /// Slot of `p` if it is resident.
    ///
    /// `heap_index` is trusted only when the slot really holds `p`; after a
    /// [`clear`](Frontier::clear) the grid may still carry stale indices.
    #[inline]
    fn slot(&self, grid: &Grid, p: Point) -> Option<usize> {
        let i = grid[p].heap_index;
        (i != NOT_IN_HEAP && self.entries.get(i) == Some(&p)).then_some(i)
    }

    /// Re-establish ordering for `p` after its key changed, inserting it
    /// if it is not resident.
    pub fn update(&mut self, grid: &mut Grid, p: Point) {
        match self.slot(grid, p) {
            Some(i) => {
                let i = self.sift_up(grid, i);
                self.sift_down(grid, i);
            }
            None => self.insert(grid, p),
        }
    }

    fn insert(&mut self, grid: &mut Grid, p: Point) {
        let i = self.entries.len();
        self.entries.push(p);
        grid[p].heap_index = i;
        self.sift_up(grid, i);
    }

    #[inline]
    fn key(&self, grid: &Grid, i: usize) -> i32 {
        grid[self.entries[i]].h
    }

    fn swap(&mut self, grid: &mut Grid, i: usize, j: usize) {
        self.entries.swap(i, j);
        grid[self.entries[i]].heap_index = i;
        grid[self.entries[j]].heap_index = j;
    }

    /// Returns the final slot.
    fn sift_up(&mut self, grid: &mut Grid, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.key(grid, i) >= self.key(grid, parent) {
                break;
            }
            self.swap(grid, i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, grid: &mut Grid, mut i: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < n && self.key(grid, right) < self.key(grid, left) {
                child = right;
            }
            if self.key(grid, child) >= self.key(grid, i) {
                break;
            }
            self.swap(grid, i, child);
            i = child;
        }
    }

    /// Whether the heap ordering and every back-pointer hold.
    pub fn is_consistent(&self, grid: &Grid) -> bool {
        self.entries.iter().enumerate().all(|(i, &p)| {
            grid[p].heap_index == i && (i == 0 || self.key(grid, (i - 1) / 2) <= self.key(grid, i))
        })
    }
}

impl Frontier for IndexedHeap {
    /// Insert `p`; if it is already resident this is an [`update`](IndexedHeap::update).
    fn push(&mut self, grid: &mut Grid, p: Point) {
        self.update(grid, p);
    }

    fn pop(&mut self, grid: &mut Grid) -> Option<Point> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(grid, 0, last);
        let p = self.entries.pop()?;
        grid[p].heap_index = NOT_IN_HEAP;
        if !self.entries.is_empty() {
            self.sift_down(grid, 0);
        }
        Some(p)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
