//! The search driver shared by DFS, BFS and A*.
//!
//! One loop serves all three algorithms: pop, stop on the end, skip what
//! was already expanded, hand the admissible neighbors to the algorithm's
//! enqueue hook, record the expansion. Only the [`Frontier`] and the hook
//! change between algorithms.

use maze_core::{Grid, Point};

use crate::distance::manhattan;
use crate::frontier::{Frontier, Queue, Stack};
use crate::heap::IndexedHeap;
use crate::neighbors::Neighbors;
use crate::trace::{Algo, Trace};
use crate::visited::VisitedSet;

/// Owns the scratch state of a search: visited-set, the three frontiers
/// and the trace.
///
/// A `Solver` can be reused across grids. State is **not** reset by
/// [`solve`](Self::solve); call [`clear`](Self::clear) between solves, or
/// use [`solve_all`](Self::solve_all).
#[derive(Default)]
pub struct Solver {
    visited: VisitedSet,
    stack: Stack,
    queue: Queue,
    heap: IndexedHeap,
    trace: Trace,
    nbuf: Neighbors,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the visited-set, every frontier and the trace.
    pub fn clear(&mut self) {
        self.visited.clear();
        self.stack.clear();
        self.queue.clear();
        self.heap.clear();
        self.trace.clear();
    }

    /// Search `grid` from its start to its end with `algo` and return the
    /// visit trace.
    ///
    /// An unsolvable maze is not an error: the returned trace simply does
    /// not end on [`Grid::end`]. Solving with [`Algo::AStar`] first resets
    /// every cell's scores, so earlier solves on the same grid do not leak
    /// into it.
    pub fn solve(&mut self, grid: &mut Grid, algo: Algo) -> &Trace {
        let Self {
            visited,
            stack,
            queue,
            heap,
            trace,
            nbuf,
        } = self;

        match algo {
            Algo::Dfs => drive(grid, algo, stack, visited, trace, nbuf, |f, g, _, n| {
                f.push(g, n)
            }),
            Algo::Bfs => drive(grid, algo, queue, visited, trace, nbuf, |f, g, _, n| {
                f.push(g, n)
            }),
            Algo::AStar => {
                seed_scores(grid);
                drive(grid, algo, heap, visited, trace, nbuf, relax)
            }
        }

        log::debug!(
            "{algo}: {} expansions, end reached: {}",
            self.trace.len(),
            self.trace.reached(grid.end())
        );
        &self.trace
    }

    /// Clear, then solve with every algorithm in [`Algo::ALL`] order.
    pub fn solve_all(&mut self, grid: &mut Grid) -> Vec<(Algo, Trace)> {
        Algo::ALL
            .into_iter()
            .map(|algo| {
                self.clear();
                (algo, self.solve(grid, algo).clone())
            })
            .collect()
    }

    /// The trace of the most recent solve.
    #[inline]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Total entries left in all three frontiers.
    pub fn frontier_len(&self) -> usize {
        self.stack.len() + self.queue.len() + self.heap.len()
    }
}

/// Reset all scores, then give the start `g = 0` and its Manhattan
/// estimate.
fn seed_scores(grid: &mut Grid) {
    grid.reset_scores();
    let start = grid.start();
    let h = manhattan(start, grid.end());
    let cell = &mut grid[start];
    cell.g = 0;
    cell.h = h;
}

/// A* enqueue hook: relax `n` through `curr`, rescore it and re-sift.
fn relax(heap: &mut IndexedHeap, grid: &mut Grid, curr: Point, n: Point) {
    let tentative_g = grid[curr].g + 1;
    let end = grid.end();
    let cell = &mut grid[n];
    if tentative_g < cell.g {
        cell.g = tentative_g;
    }
    cell.h = cell.g + manhattan(n, end);
    heap.update(grid, n);
}

fn drive<F: Frontier>(
    grid: &mut Grid,
    algo: Algo,
    frontier: &mut F,
    visited: &mut VisitedSet,
    trace: &mut Trace,
    nbuf: &mut Neighbors,
    mut enqueue: impl FnMut(&mut F, &mut Grid, Point, Point),
) {
    let (start, end) = (grid.start(), grid.end());
    frontier.push(grid, start);

    while let Some(curr) = frontier.pop(grid) {
        if curr == end {
            trace.push(curr, algo);
            return;
        }
        if visited.contains(curr) {
            continue;
        }
        let neighbors = nbuf.cardinal(curr, |n| grid.is_passable(n) && !visited.contains(n));
        for &n in neighbors {
            enqueue(frontier, grid, curr, n);
        }
        visited.add(curr);
        trace.push(curr, algo);
    }
}
