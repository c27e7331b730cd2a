//! One request's worth of work: a fresh maze and its three traces.

use std::collections::BTreeMap;

use maze_core::{Grid, Point};
use maze_gen::{MazeGenError, build_maze};
use maze_paths::{Algo, Solver, Trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// A generated maze solved by every algorithm in [`Algo::ALL`] order.
#[derive(Debug, Clone)]
pub struct SolvedMaze {
    pub grid: Grid,
    pub traces: Vec<(Algo, Trace)>,
}

impl SolvedMaze {
    /// Build a `size × size` maze and solve it.
    ///
    /// With `seed` the RNG is seeded per call, so equal seeds give equal
    /// mazes; without it the thread RNG is used.
    pub fn generate(size: i32, seed: Option<u64>) -> Result<Self, MazeGenError> {
        let grid = match seed {
            Some(seed) => build_maze(size, &mut StdRng::seed_from_u64(seed))?,
            None => build_maze(size, &mut rand::rng())?,
        };
        Ok(Self::solve(grid))
    }

    /// Solve an existing grid.
    pub fn solve(mut grid: Grid) -> Self {
        let traces = Solver::new().solve_all(&mut grid);
        Self { grid, traces }
    }

    /// One-line summary for request logs.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .traces
            .iter()
            .map(|(algo, trace)| {
                let mark = if trace.reached(self.grid.end()) { "" } else { " (unsolved)" };
                format!("{algo} {}{mark}", trace.len())
            })
            .collect();
        parts.join(", ")
    }
}

/// JSON form of a [`SolvedMaze`] for external renderers.
#[derive(Debug, Clone, Serialize)]
pub struct MazeSnapshot {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
    pub obstacles: Vec<Point>,
    pub traces: BTreeMap<Algo, Trace>,
}

impl From<SolvedMaze> for MazeSnapshot {
    fn from(solved: SolvedMaze) -> Self {
        let grid = &solved.grid;
        Self {
            width: grid.width(),
            height: grid.height(),
            start: grid.start(),
            end: grid.end(),
            obstacles: grid.obstacles().collect(),
            traces: solved.traces.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = SolvedMaze::generate(15, Some(4)).unwrap();
        let b = SolvedMaze::generate(15, Some(4)).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.traces, b.traces);
        assert_eq!(a.summary(), b.summary());
    }

    #[test]
    fn traces_follow_reference_order() {
        let s = SolvedMaze::generate(10, None).unwrap();
        let algos: Vec<Algo> = s.traces.iter().map(|(a, _)| *a).collect();
        assert_eq!(algos, Algo::ALL.to_vec());
    }

    #[test]
    fn invalid_size_is_an_error() {
        assert!(SolvedMaze::generate(0, Some(1)).is_err());
    }

    #[test]
    fn snapshot_json_shape() {
        let grid = Grid::parse("S#\n.E").unwrap();
        let snap = MazeSnapshot::from(SolvedMaze::solve(grid));
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["width"], 2);
        assert_eq!(v["start"], serde_json::json!({"x": 0, "y": 0}));
        assert_eq!(v["obstacles"], serde_json::json!([{"x": 1, "y": 0}]));
        assert_eq!(
            v["traces"]["DFS"],
            serde_json::json!(["0,0-DFS", "1,0-DFS", "1,1-DFS"])
        );
        assert_eq!(
            v["traces"]["BFS"],
            serde_json::json!(["0,0-BFS", "1,0-BFS", "1,1-BFS"])
        );
        assert_eq!(v["traces"]["AStar"].as_array().map(Vec::len), Some(3));
    }
}
