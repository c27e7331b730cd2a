//! Maze search visualiser: builds a random maze per request, solves it
//! with DFS, BFS and A*, and serves a page that replays each visit trace.

pub mod app;
pub mod config;
pub mod render;
pub mod snapshot;

pub use app::{AppState, router};
pub use config::ServerConfig;
pub use snapshot::{MazeSnapshot, SolvedMaze};
