mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use http::HeaderValue;
use scribe_brief::BriefState;
use scribe_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be constructed or the
    /// configured CORS origin is not a valid header value
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let state = BriefState::from_config(&config.provider)?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(
                &config.server.health.path,
                axum::routing::get(health::health_handler),
            );
        }

        // Brief endpoint
        app = app.merge(scribe_brief::brief_router(state));

        // Apply middleware layers (innermost first)

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Cross-origin headers, outermost so they ride on every response
        let origin = HeaderValue::from_str(&config.server.cors.origin).map_err(|e| {
            anyhow::anyhow!("invalid CORS origin '{}': {e}", config.server.cors.origin)
        })?;
        app = app.layer(axum::middleware::from_fn(move |request, next| {
            let origin = origin.clone();
            async move { cors::cors_middleware(origin, request, next).await }
        }));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
