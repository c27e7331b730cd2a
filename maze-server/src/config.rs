//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SIZE: i32 = 40;
/// Larger grids make the page unwieldy.
pub const MAX_SIZE: i32 = 200;

#[derive(Parser, Debug, Clone)]
#[command(name = "maze-server")]
#[command(about = "Serve a page animating DFS, BFS and A* on a random maze", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MAZE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Side length of the square maze
    #[arg(
        short,
        long,
        env = "MAZE_SIZE",
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(i32).range(1..=MAX_SIZE as i64),
    )]
    pub size: i32,

    /// Seed every request's RNG with this value (same maze on every load)
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
