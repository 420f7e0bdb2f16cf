//! HTTP request handlers

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Json, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::inference::{InferenceError, InferenceService};

/// Shared application state
pub struct AppState {
    pub service: InferenceService,
}

impl AppState {
    pub fn new(service: InferenceService) -> Self {
        Self { service }
    }
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        message: state.service.health().to_string(),
    })
}

/// Prediction endpoint
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let prediction = state.service.predict_blocking(request.text).await?;
    Ok(Json(PredictResponse { prediction }))
}

/// Offline accuracy endpoint
pub async fn accuracy(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(AccuracyResponse {
        accuracy: state.service.accuracy(),
    })
}

/// Logs method, path, status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:.2?})",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

/// Failures surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a valid `PredictRequest`
    BadRequest(JsonRejection),
    /// Vectorizing or classifying failed
    Inference(InferenceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection)
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        Self::Inference(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, kind) = match self {
            Self::BadRequest(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                (rejection.status(), rejection.body_text(), "invalid_request_error")
            }
            Self::Inference(err) => {
                error!("Inference failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), "server_error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: ErrorDetail {
                    message,
                    r#type: kind.to_string(),
                },
            }),
        )
            .into_response()
    }
}

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccuracyResponse {
    pub accuracy: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
}
