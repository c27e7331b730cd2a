//! Random maze generation for the grid searches.

pub mod mapgen;

pub use mapgen::{MazeGen, MazeGenError, OBSTACLE_DENSITY, build_maze};
