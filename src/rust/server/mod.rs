//! HTTP server for inference
//!
//! Exposes the health, prediction and accuracy endpoints behind a
//! single-origin CORS policy.

mod handlers;
mod routes;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::{middleware, Router};
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;
use crate::inference::InferenceService;

pub use handlers::{
    AccuracyResponse, ApiError, AppState, ErrorDetail, ErrorResponse, HealthResponse, PredictRequest,
    PredictResponse,
};
pub use routes::api_routes;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid CORS origin {0:?}")]
    InvalidOrigin(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cross-origin policy admitting exactly one origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.to_string()))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the application router with its middleware stack.
pub fn app(service: InferenceService, cors_origin: &str) -> Result<Router, ServerError> {
    let state = Arc::new(AppState::new(service));

    Ok(Router::new()
        .merge(api_routes())
        .layer(cors_layer(cors_origin)?)
        .layer(middleware::from_fn(handlers::log_requests))
        .with_state(state))
}

/// Serve on an already bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Start the HTTP inference server
pub async fn start(service: InferenceService, config: ServerConfig) -> Result<(), ServerError> {
    let app = app(service, &config.cors_origin)?;

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Server listening on http://{}", addr);
    info!("Allowed origin: {}", config.cors_origin);
    info!("API endpoints:");
    info!("  GET  /         - Health check");
    info!("  POST /predict  - Classify text");
    info!("  GET  /accuracy - Offline model accuracy");

    serve(listener, app).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
