//! **maze-core** — grid and geometry types for the maze solvers.
//!
//! This crate provides the data model shared by the rest of the workspace:
//! integer geometry ([`Point`], [`Range`]) and the maze [`Grid`] of
//! [`Cell`]s with its start, end and obstacle map.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, NOT_IN_HEAP, SCORE_INFINITY};
pub use geom::{Point, Range};
pub use grid::{Grid, GridParseError};
