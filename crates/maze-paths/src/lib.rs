//! Grid search strategies that produce replayable visit traces.
//!
//! Three classical searches share one driver, [`Solver`]:
//!
//! - **DFS** over a LIFO [`Stack`]
//! - **BFS** over a FIFO [`Queue`]
//! - **A\*** (best-first on `g + Manhattan`) over an [`IndexedHeap`]
//!
//! Each solve records the ordered list of expanded cells as a [`Trace`] of
//! `"<y>,<x>-<algo>"` tokens, which is what renderers animate. The trace is
//! a visit order, not a path.
//!
//! # Trait hierarchy
//!
//! | Type | Implements |
//! |---|---|
//! | [`Stack`], [`Queue`] | [`Frontier`] |
//! | [`IndexedHeap`] | [`Frontier`] + `update` |

mod distance;
mod frontier;
mod heap;
mod neighbors;
mod solver;
mod trace;
mod visited;

pub use distance::manhattan;
pub use frontier::{Frontier, Queue, Stack};
pub use heap::IndexedHeap;
pub use neighbors::Neighbors;
pub use solver::Solver;
pub use trace::{Algo, TokenParseError, Trace, UnknownAlgo, VisitToken};
pub use visited::VisitedSet;
