//! # my-agent-server
//!
//! Launch layer for the `my_agent` ADK-style agent server.
//!
//! The binary does three things: export `ADK_AGENT_DIR` so the serving layer
//! knows where the agent definition lives, resolve a listen port from `PORT`
//! (default 8080), and serve on `0.0.0.0`. This library exposes those pieces
//! for reuse and tests; linking it starts nothing.
//!
//! ```rust,no_run
//! use my_agent_server::{config::LaunchConfig, server, server::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let launch = LaunchConfig::from_env()?;
//!     launch.export_agent_dir();
//!     let config = ServerConfig::new(launch.agent_dir.as_str());
//!     server::run(config, &launch.host, launch.port).await
//! }
//! ```

pub mod config;
pub mod server;
pub mod telemetry;

pub use config::{ConfigError, LaunchConfig};
pub use server::{SecurityConfig, ServerConfig, create_app, run};
