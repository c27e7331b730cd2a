//! HTTP routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::config::ServerConfig;
use crate::render::render_page;
use crate::snapshot::{MazeSnapshot, SolvedMaze};

/// Per-server settings shared by all requests. Every request builds its
/// own maze; nothing mutable is shared.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub size: i32,
    pub seed: Option<u64>,
}

impl From<&ServerConfig> for AppState {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            size: cfg.size,
            seed: cfg.seed,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/maze", get(maze_json))
        .route("/health", get(health))
        .with_state(state)
}

/// Handler error: logged, then reported as a bare 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

fn solve(state: AppState) -> Result<SolvedMaze, AppError> {
    let solved = SolvedMaze::generate(state.size, state.seed)?;
    log::info!(
        "{}x{} maze (seed {:?}): {}",
        state.size,
        state.size,
        state.seed,
        solved.summary()
    );
    Ok(solved)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let solved = solve(state)?;
    Ok(Html(render_page(&solved)?))
}

async fn maze_json(State(state): State<AppState>) -> Result<Json<MazeSnapshot>, AppError> {
    Ok(Json(MazeSnapshot::from(solve(state)?)))
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(size: i32) -> State<AppState> {
        State(AppState {
            size,
            seed: Some(99),
        })
    }

    #[tokio::test]
    async fn index_renders_all_panels() {
        let Html(page) = index(seeded(12)).await.unwrap();
        assert_eq!(page.matches("class=\"cell").count(), 3 * 12 * 12);
        assert_eq!(page.matches("animateTrace([").count(), 3);
    }

    #[tokio::test]
    async fn seeded_requests_repeat() {
        let Html(a) = index(seeded(8)).await.unwrap();
        let Html(b) = index(seeded(8)).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn json_matches_configured_size() {
        let Json(snap) = maze_json(seeded(9)).await.unwrap();
        assert_eq!((snap.width, snap.height), (9, 9));
        assert_eq!(snap.traces.len(), 3);
        assert!(!snap.obstacles.contains(&snap.start));
        assert!(!snap.obstacles.contains(&snap.end));
    }

    #[tokio::test]
    async fn invalid_size_is_500() {
        let err = index(seeded(0)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "OK");
    }

    #[test]
    fn state_from_config() {
        use clap::Parser;
        let cfg = ServerConfig::try_parse_from(["maze-server", "--size", "5", "--seed", "1"]).unwrap();
        let state = AppState::from(&cfg);
        assert_eq!(state.size, 5);
        assert_eq!(state.seed, Some(1));
        let _ = router(state);
    }
}
