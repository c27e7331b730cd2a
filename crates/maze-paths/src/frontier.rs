//! Pending-expansion structures.
//!
//! Every search shares one driver; the only thing that differs between
//! depth-first and breadth-first search is the [`Frontier`] discipline.
//! Entries are coordinates and duplicates are allowed: stale entries are
//! discarded by the driver when popped.

use std::collections::VecDeque;

use maze_core::{Grid, Point};

/// Common interface of the three frontiers.
///
/// The grid is passed through so that [`IndexedHeap`](crate::IndexedHeap)
/// can read scores and write back heap positions; the plain containers
/// ignore it.
pub trait Frontier {
    /// Add `p` to the frontier.
    fn push(&mut self, grid: &mut Grid, p: Point);

    /// Remove and return the next point to expand, or `None` if empty.
    fn pop(&mut self, grid: &mut Grid) -> Option<Point>;

    /// Number of resident entries.
    fn len(&self) -> usize;

    /// Drop every entry.
    fn clear(&mut self);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier used by depth-first search.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<Point>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Stack {
    #[inline]
    fn push(&mut self, _grid: &mut Grid, p: Point) {
        self.items.push(p);
    }

    #[inline]
    fn pop(&mut self, _grid: &mut Grid) -> Option<Point> {
        self.items.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// FIFO frontier used by breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<Point>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Queue {
    #[inline]
    fn push(&mut self, _grid: &mut Grid, p: Point) {
        self.items.push_back(p);
    }

    #[inline]
    fn pop(&mut self, _grid: &mut Grid) -> Option<Point> {
        self.items.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(4, 4, Point::ZERO, Point::new(3, 3))
    }

    #[test]
    fn stack_is_lifo_with_duplicates() {
        let mut g = grid();
        let mut s = Stack::new();
        s.push(&mut g, Point::new(1, 0));
        s.push(&mut g, Point::new(2, 0));
        s.push(&mut g, Point::new(1, 0));
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop(&mut g), Some(Point::new(1, 0)));
        assert_eq!(s.pop(&mut g), Some(Point::new(2, 0)));
        assert_eq!(s.pop(&mut g), Some(Point::new(1, 0)));
        assert_eq!(s.pop(&mut g), None);
        assert!(s.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let mut g = grid();
        let mut q = Queue::new();
        for x in 0..3 {
            q.push(&mut g, Point::new(x, 1));
        }
        assert_eq!(q.pop(&mut g), Some(Point::new(0, 1)));
        q.push(&mut g, Point::new(0, 1));
        assert_eq!(q.pop(&mut g), Some(Point::new(1, 1)));
        assert_eq!(q.pop(&mut g), Some(Point::new(2, 1)));
        assert_eq!(q.pop(&mut g), Some(Point::new(0, 1)));
        assert_eq!(q.pop(&mut g), None);
    }

    #[test]
    fn clear_empties_both() {
        let mut g = grid();
        let mut s = Stack::new();
        let mut q = Queue::new();
        s.push(&mut g, Point::ZERO);
        q.push(&mut g, Point::ZERO);
        s.clear();
        q.clear();
        assert!(s.is_empty());
        assert!(q.is_empty());
    }
}
