//! HTTP serving layer for the agent server.
//!
//! This is the `run(host, port)` surface the launcher delegates to: build the
//! router, bind the listener, block until shutdown. Agent semantics live
//! behind the agent directory and are not interpreted here; the routes below
//! cover liveness and the runtime configuration handed to clients.

use std::time::Duration;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderValue, Method, header},
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Security configuration for the server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 10MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 30 seconds)
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration for the agent server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Directory the agent definition is loaded from.
    pub agent_dir: String,
    /// Base URL clients should use for API calls; relative by default so it
    /// adapts to the actual host/port.
    pub backend_url: Option<String>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(agent_dir: impl Into<String>) -> Self {
        Self { agent_dir: agent_dir.into(), backend_url: None, security: SecurityConfig::default() }
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }
}

#[derive(Serialize)]
struct RuntimeConfig {
    #[serde(rename = "agentDir")]
    agent_dir: String,
    #[serde(rename = "backendUrl")]
    backend_url: String,
}

async fn health_check() -> &'static str {
    "OK"
}

async fn runtime_config(State(config): State<ServerConfig>) -> impl IntoResponse {
    let backend_url = config.backend_url.unwrap_or_else(|| "/api".to_string());

    Json(RuntimeConfig { agent_dir: config.agent_dir, backend_url })
}

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.security.allowed_origins.is_empty() {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> =
            config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Create the server application.
pub fn create_app(config: ServerConfig) -> Router {
    let api_router = Router::new()
        .route("/health", get(health_check))
        .route("/runtime-config", get(runtime_config))
        .with_state(config.clone());

    let app = Router::new().nest("/api", api_router);

    let cors_layer = build_cors_layer(&config);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.security.request_timeout))
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(cors_layer)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

/// Bind `host:port` and serve until the process is terminated.
pub async fn run(config: ServerConfig, host: &str, port: u16) -> Result<()> {
    let app = create_app(config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "agent server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        // Returning here would stop the server immediately; keep serving.
        std::future::pending::<()>().await;
    }
}
