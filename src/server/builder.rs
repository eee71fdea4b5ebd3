//! ServerBuilder for fluent API to build HTTP servers

use super::router::{build_graph_routes, health_routes};
use crate::config::ServerConfig;
use crate::core::graph::GraphProvider;
use crate::core::serializer::{ElementSerializer, JsonElementSerializer};
use crate::resources::handlers::AppState;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the graph HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_graph_provider(provider)
///     .build()?;
/// ```
pub struct ServerBuilder {
    provider: Option<Arc<dyn GraphProvider>>,
    serializer: Arc<dyn ElementSerializer>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            provider: None,
            serializer: Arc::new(JsonElementSerializer),
            custom_routes: Vec::new(),
        }
    }

    /// Set the graph provider (required)
    pub fn with_graph_provider(mut self, provider: impl GraphProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Use the in-memory graphs seeded by `config`
    pub fn with_config(self, config: ServerConfig) -> Self {
        self.with_graph_provider(config.into_provider())
    }

    /// Replace the default JSON element serializer
    pub fn with_serializer(mut self, serializer: impl ElementSerializer + 'static) -> Self {
        self.serializer = Arc::new(serializer);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        let provider = self.provider.take().ok_or_else(|| {
            anyhow::anyhow!("GraphProvider is required. Call .with_graph_provider()")
        })?;
        Ok(AppState::new(provider, self.serializer.clone()))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = health_routes().merge(build_graph_routes(state));
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_config(config)
    ///     .serve("127.0.0.1:8182").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
