//! bilharzia-server - HTTP server for the bilharzia risk dashboard
//!
//! Serves the three dashboard pages as server-rendered HTML, the assessment
//! form submission, and a small JSON API. The classifier and reference
//! dataset are loaded before the server starts and shared read-only through
//! [`AppState`].

mod error;
pub mod http;
mod state;
pub mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::{ErrorResponse, ServerError};
pub use http::create_router;
pub use state::AppState;

/// The dashboard server
pub struct DashboardServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl DashboardServer {
    /// Create a server over already-loaded state
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self::with_state(config, Arc::new(state))
    }

    /// Create a server sharing an existing state handle
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("bilharzia dashboard listening on http://{}", addr);

        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        let router = create_router(self.state);
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Default port for the dashboard
pub const DEFAULT_PORT: u16 = 8501;
/// Default host for the dashboard
pub const DEFAULT_HOST: &str = "127.0.0.1";

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "127.0.0.1:8501")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
