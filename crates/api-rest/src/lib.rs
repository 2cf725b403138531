//! # API REST
//!
//! REST API implementation for HeartGuide.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS)
//!
//! Uses `api-shared` for envelopes and the counsel/fallback orchestration.

#![warn(rust_2018_idioms)]

use api_shared::{
    AnalyzeReq, AnalyzeRes, ChatReq, ChatRes, ChatStatusRes, CounselService, HealthRes,
    HealthService,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use heartguide_types::NonEmptyText;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub counsel: CounselService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, chat_status, chat, analyze),
    components(schemas(
        HealthRes,
        ChatStatusRes,
        ChatReq,
        ChatRes,
        AnalyzeReq,
        AnalyzeRes,
        heartguide_types::Message,
        heartguide_types::Role,
        heartguide_types::RelationshipContext,
        heartguide_types::IssueCategory,
        heartguide_types::UrgencyLevel,
        heartguide_types::OnboardingData,
        heartguide_types::RelationshipStatus,
        heartguide_types::CommunicationStyle,
    ))
)]
pub struct ApiDoc;

/// Builds the HTTP router with all routes, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", get(chat_status).post(chat))
        .route("/api/analyze", post(analyze))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/chat",
    responses(
        (status = 200, description = "Chat API status", body = ChatStatusRes)
    )
)]
#[axum::debug_handler]
async fn chat_status(State(_state): State<AppState>) -> Json<ChatStatusRes> {
    Json(HealthService::chat_status())
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatReq,
    responses(
        (status = 200, description = "Counselor reply", body = ChatRes),
        (status = 400, description = "Missing or empty messages", body = ChatRes),
        (status = 500, description = "Hosted model failure", body = ChatRes)
    )
)]
/// Get the counselor's reply to the latest message
///
/// Forwards the conversation and optional context to the primary responder. There is no
/// offline fallback for chat; classified failures are returned as the error text.
///
/// # Errors
/// Returns `400 Bad Request` if the body is malformed or has no messages, and
/// `500 Internal Server Error` if the hosted model call fails.
#[axum::debug_handler]
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatReq>, JsonRejection>,
) -> Result<Json<ChatRes>, (StatusCode, Json<ChatRes>)> {
    let req = match payload {
        Ok(Json(req)) if !req.messages.is_empty() => req,
        Ok(_) => return Err(bad_request(ChatRes::error("Messages array is required"))),
        Err(rejection) => {
            tracing::warn!("Rejected chat payload: {}", rejection);
            return Err(bad_request(ChatRes::error("Messages array is required")));
        }
    };

    let context = req.resolved_context();
    match state.counsel.chat(&req.messages, context.as_ref()).await {
        Ok(reply) => Ok(Json(ChatRes::reply(reply))),
        Err(e) => {
            tracing::error!("Chat API error: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatRes::error(e.to_string())),
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Analysis from the hosted model or the offline fallback", body = AnalyzeRes),
        (status = 400, description = "Missing, non-string or blank data", body = AnalyzeRes)
    )
)]
/// Analyse free-text relationship data
///
/// Tries the hosted model first; on any failure, timeout or blank reply the offline fallback
/// report is returned with `fallback: true`.
///
/// # Errors
/// Returns `400 Bad Request` if `data` is missing, not a string, empty, or whitespace only.
#[axum::debug_handler]
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<Json<AnalyzeRes>, (StatusCode, Json<AnalyzeRes>)> {
    let data = match payload {
        // An empty string counts as missing; whitespace-only is reported as empty below.
        Ok(Json(AnalyzeReq { data: Some(data) })) if !data.is_empty() => data,
        Ok(_) => return Err(bad_request(AnalyzeRes::error("Data string is required"))),
        Err(rejection) => {
            tracing::warn!("Rejected analyze payload: {}", rejection);
            return Err(bad_request(AnalyzeRes::error("Data string is required")));
        }
    };

    let data = NonEmptyText::new(&data)
        .map_err(|_| bad_request(AnalyzeRes::error("Data cannot be empty")))?;

    tracing::info!(length = data.as_str().len(), "Analyze request received");
    let outcome = state.counsel.analyze(&data).await;

    Ok(Json(AnalyzeRes::from_outcome(outcome)))
}

fn bad_request<T>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::BAD_REQUEST, Json(body))
}
