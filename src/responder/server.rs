//! HTTP server surface for the responder.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request tracing)
//! - Serve with graceful shutdown on the lifecycle broadcast
//!
//! # Design Decisions
//! - `/api/products` is routed with `any()` so the responder itself owns the
//!   405 behavior (body and log entry) instead of axum's bare default
//! - No server-side request timeout layer: the `timeout` mode must be free to
//!   sleep past the client budget

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tower_http::trace::TraceLayer;

use crate::config::LabConfig;
use crate::responder::Responder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub started_at: Instant,
}

/// HTTP server for the failure-injection demo.
pub struct HttpServer {
    router: Router,
    config: LabConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LabConfig) -> Self {
        let state = AppState {
            responder: Arc::new(Responder::new(config.responder.clone())),
            started_at: Instant::now(),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/products", any(products_handler))
            .route("/health", get(health_handler))
            .fallback(not_found_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown broadcast fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");
        tracing::info!("Failure simulation options:");
        tracing::info!("  timeout: GET /api/products?failure=timeout");
        tracing::info!("  503:     GET /api/products?failure=503");
        tracing::info!("  normal:  GET /api/products");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LabConfig {
        &self.config
    }
}

#[derive(Debug, Deserialize)]
struct ProductsQuery {
    failure: Option<String>,
}

/// Product listing with optional failure injection.
async fn products_handler(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<ProductsQuery>,
) -> Response {
    let injected = state
        .responder
        .handle(method.as_str(), query.failure.as_deref())
        .await;
    let status =
        StatusCode::from_u16(injected.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(injected.body)).into_response()
}

/// Liveness probe.
async fn health_handler(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
    .into_response()
}

/// Catch-all for unmatched routes.
async fn not_found_handler(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Route {} not found", uri.path()),
            "code": "NET_404",
        })),
    )
        .into_response()
}
