//! Random maze construction.
//!
//! Obstacles are independent per cell: every cell other than the start and
//! the end becomes an obstacle with probability [`OBSTACLE_DENSITY`]. No
//! connectivity is guaranteed; an enclosed start simply yields an
//! unsolvable maze.

use std::fmt;

use maze_core::{Grid, Point};
use maze_paths::manhattan;
use rand::{Rng, RngExt};

/// Probability that a non-terminal cell is an obstacle.
pub const OBSTACLE_DENSITY: f64 = 0.3;

/// Maze generator owning its random source.
///
/// Seeding is the caller's business: pass a seeded RNG for reproducible
/// mazes or a thread RNG for fresh ones.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a random `size × size` maze.
    pub fn build(&mut self, size: i32) -> Result<Grid, MazeGenError> {
        self.build_rect(size, size)
    }

    /// Build a random `width × height` maze. See [`build_maze`].
    pub fn build_rect(&mut self, width: i32, height: i32) -> Result<Grid, MazeGenError> {
        generate(&mut self.rng, width, height)
    }
}

/// Build a random `size × size` maze from `rng`.
///
/// 1. Start and end are sampled uniformly and independently; they may
///    coincide.
/// 2. Each other cell becomes an obstacle with [`OBSTACLE_DENSITY`].
/// 3. The start gets `g = 0` and `h = Manhattan(start, end)`; every other
///    score stays at its sentinel.
pub fn build_maze<R: Rng>(size: i32, rng: &mut R) -> Result<Grid, MazeGenError> {
    generate(rng, size, size)
}

fn generate<R: Rng>(rng: &mut R, width: i32, height: i32) -> Result<Grid, MazeGenError> {
    if width <= 0 || height <= 0 {
        return Err(MazeGenError::EmptyGrid { width, height });
    }

    let start = random_point(rng, width, height);
    let end = random_point(rng, width, height);
    let mut grid = Grid::new(width, height, start, end);

    for p in grid.bounds() {
        if p == start || p == end {
            continue;
        }
        if rng.random_bool(OBSTACLE_DENSITY) {
            grid.set_obstacle(p, true);
        }
    }

    let h = manhattan(start, end);
    let cell = &mut grid[start];
    cell.g = 0;
    cell.h = h;

    log::trace!(
        "maze {width}x{height}: start {start}, end {end}, {} obstacles",
        grid.obstacle_count()
    );
    Ok(grid)
}

fn random_point<R: Rng>(rng: &mut R, width: i32, height: i32) -> Point {
    Point::new(rng.random_range(0..width), rng.random_range(0..height))
}

/// Errors from maze construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeGenError {
    /// A dimension was zero or negative.
    EmptyGrid { width: i32, height: i32 },
}

impl fmt::Display for MazeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "maze must have at least one cell, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for MazeGenError {}
