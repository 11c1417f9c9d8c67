//! HTTP request handlers for the broadcast service.
//!
//! Implements the generation and health check endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use idhaa_domain::traits::CompletionProvider;
use idhaa_domain::BroadcastDocument;
use idhaa_extractor::{ExtractorError, GenerationRequest, Generator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared application state
///
/// State is passed into handlers explicitly; there is no process-wide
/// singleton.
pub struct AppState<L>
where
    L: CompletionProvider,
{
    /// The generator servicing requests
    pub generator: Arc<Generator<L>>,
}

impl<L> Clone for AppState<L>
where
    L: CompletionProvider,
{
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

/// Successful generation response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The validated broadcast document
    pub content: BroadcastDocument,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing error message
    pub error: String,
}

// Localized user-facing notices. The client always receives one generic
// message per failure class; structural detail stays in the logs.
const MSG_GENERATION_FAILED: &str = "تعذر إنشاء الإذاعة، يرجى المحاولة مرة أخرى";
const MSG_RATE_LIMITED: &str = "تم تجاوز حد الطلبات، يرجى المحاولة بعد قليل";
const MSG_BILLING_REQUIRED: &str = "الخدمة غير متاحة حالياً، يرجى مراجعة الاشتراك";

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Generation pipeline error
    Generation(ExtractorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Generation(e) = self;

        error!("Generation request failed: {}", e);

        let (status, message) = match &e {
            ExtractorError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, MSG_RATE_LIMITED),
            ExtractorError::BillingRequired => (StatusCode::PAYMENT_REQUIRED, MSG_BILLING_REQUIRED),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, MSG_GENERATION_FAILED),
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        AppError::Generation(e)
    }
}

/// POST /broadcasts/generate - Generate a broadcast script
async fn generate_broadcast<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError>
where
    L: CompletionProvider + Send + Sync + 'static,
    ExtractorError: From<L::Error>,
{
    let result = state.generator.generate(request).await?;

    Ok(Json(GenerateResponse {
        content: result.document,
    }))
}

/// GET /health - Liveness probe
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>) -> AxumRouter
where
    L: CompletionProvider + Send + Sync + 'static,
    ExtractorError: From<L::Error>,
{
    AxumRouter::new()
        .route("/broadcasts/generate", post(generate_broadcast::<L>))
        .route("/health", get(health_check))
        .with_state(state)
}
