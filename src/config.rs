//! # Configuration
//!
//! Command-line flags, each with an environment fallback.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hot-coffee")]
#[command(about = "Coffee shop order and inventory service")]
#[command(
    after_help = "Environment:\n  HOT_COFFEE_PORT   Port to listen on\n  HOT_COFFEE_DIR    Data directory\n  RUST_LOG          Log filter, e.g. info or hot_coffee=debug"
)]
pub struct Config {
    /// Port number
    #[arg(long, env = "HOT_COFFEE_PORT", default_value_t = 8080, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Path to the data directory
    #[arg(long, env = "HOT_COFFEE_DIR", default_value = "data")]
    pub dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: std::net::IpAddr,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
