//! Maze search page server.

use anyhow::Context;
use clap::Parser;
use maze_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    log::info!(
        "serving {0}x{0} mazes on http://{addr}{1}",
        config.size,
        config
            .seed
            .map(|s| format!(" (seed {s})"))
            .unwrap_or_default()
    );
    axum::serve(listener, router(AppState::from(&config))).await?;
    Ok(())
}
