use axum::{Json, extract::State};
use std::sync::Arc;
use validator::Validate;

use crate::AppState;
use crate::models::{NameRequest, NameResponse};
use crate::utils::{ApiError, ApiResult};

// Generate Chinese name suggestions for an English name
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = NameRequest,
    responses(
        (status = 200, description = "Generated name suggestions", body = NameResponse),
        (status = 400, description = "Malformed request or blank name"),
        (status = 502, description = "Upstream model failure"),
        (status = 504, description = "Upstream call timed out")
    ),
    tag = "Names"
)]
pub async fn generate_names(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NameRequest>,
) -> ApiResult<Json<NameResponse>> {
    request.validate().map_err(|e| ApiError::validation(e.to_string()))?;

    // Whitespace-only names pass the length check but carry no signal.
    if request.english_name.trim().is_empty() {
        return Err(ApiError::validation("english_name must not be blank"));
    }

    let response = state.generator.generate(&request).await?;

    tracing::debug!("returning {} suggestions", response.suggestions.len());
    Ok(Json(response))
}
