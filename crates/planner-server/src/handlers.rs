//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use investment_advisor::{
    AdvisorError, AiInsights, FieldError, InvestmentRecommendation, Profile, ProfileInput,
    ProfileStatistics,
};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub project: String,
    pub model_backend_connected: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
            fields: Vec::new(),
        }),
    )
}

/// Turn the raw payload into a validated profile, or a 422 response
fn validated(payload: Result<Json<ProfileInput>, JsonRejection>) -> Result<Profile, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!("Rejected profile payload: {}", rejection.body_text());
        api_error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PAYLOAD", rejection.body_text())
    })?;
    
    input.validate().map_err(|e| {
        tracing::debug!("Profile validation failed: {}", e);
        let fields = match e {
            AdvisorError::Validation(fields) => fields,
            _ => Vec::new(),
        };
        let message = fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: message,
                code: "VALIDATION_ERROR".into(),
                fields,
            }),
        )
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_backend_connected = state.provider.health_check().await.unwrap_or(false);
    
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        project: state.project_name.to_string(),
        model_backend_connected,
    })
}

/// Allocation + insights for a submitted profile
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<InvestmentRecommendation>, ApiError> {
    let profile = validated(payload)?;
    let recommendation = state.service.generate_recommendation(&profile).await;
    tracing::info!(
        risk = %profile.risk_tolerance,
        horizon = profile.time_horizon,
        "Recommendation generated"
    );
    Ok(Json(recommendation))
}

/// Savings statistics and projected value
pub async fn statistics(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<ProfileStatistics>, ApiError> {
    let profile = validated(payload)?;
    let stats = state.service.statistics(&profile).map_err(|e| {
        tracing::debug!("Projection failed: {}", e);
        api_error(StatusCode::UNPROCESSABLE_ENTITY, "PROJECTION_OUT_OF_RANGE", e.to_string())
    })?;
    Ok(Json(stats))
}

/// Insights only
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn generate_insights(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<AiInsights>, ApiError> {
    let profile = validated(payload)?;
    Ok(Json(state.service.generate_insights(&profile).await))
}
