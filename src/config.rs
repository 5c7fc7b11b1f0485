//! Environment-derived launch configuration.
//!
//! Two scalars drive the whole launch sequence: the agent directory exported
//! through `ADK_AGENT_DIR` for the serving layer to discover, and the listen
//! port read from `PORT`. Both must be resolved before the server starts.

use std::num::ParseIntError;

use thiserror::Error;

/// Directory containing the agent definition. Exported via `ADK_AGENT_DIR`.
pub const AGENT_DIR: &str = "my_agent";

/// The server binds all interfaces; there is no flag to narrow this.
pub const BIND_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

const AGENT_DIR_VAR: &str = "ADK_AGENT_DIR";
const PORT_VAR: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

/// Resolve the listen port from the raw `PORT` value.
///
/// An unset variable falls back to [`DEFAULT_PORT`]. A set-but-unparsable
/// value (including the empty string) is a hard error: launching on a port
/// the operator did not ask for would mask the misconfiguration.
pub fn resolve_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_string(), source }),
    }
}

/// Everything the launcher needs to start serving.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    pub host: String,
    pub port: u16,
    pub agent_dir: String,
}

impl LaunchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(PORT_VAR).ok();
        let port = resolve_port(raw.as_deref())?;

        Ok(Self {
            host: BIND_HOST.to_string(),
            port,
            agent_dir: AGENT_DIR.to_string(),
        })
    }

    /// Publish the agent directory through the process environment.
    ///
    /// Always overwrites: a stale `ADK_AGENT_DIR` inherited from the parent
    /// process must not win over the directory this binary was built to serve.
    pub fn export_agent_dir(&self) {
        // Called once during startup, before any worker task reads the
        // environment.
        unsafe { std::env::set_var(AGENT_DIR_VAR, &self.agent_dir) };
    }
}
