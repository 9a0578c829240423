//! Fund handlers
//!
//! Each mutation persists the record set before the response is returned.
//! For the update and delete routes the id lookup happens before the body
//! is inspected, so a request against a nonexistent fund never produces a
//! validation error.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain_fund::FundProjection;

use crate::dto::{coerce_number, CreateFundRequest, UpdatePerformanceRequest};
use crate::error::ApiError;
use crate::AppState;

/// Lists all funds
pub async fn list_funds(State(state): State<AppState>) -> Json<Vec<FundProjection>> {
    Json(state.store.list())
}

/// Creates a new fund
pub async fn create_fund(
    State(state): State<AppState>,
    body: Result<Json<CreateFundRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FundProjection>), ApiError> {
    let Json(request) =
        body.map_err(|_| ApiError::Validation("The input data is invalid.".to_string()))?;

    let fund = request.try_into_fund()?;
    let projection = state.store.insert(fund)?;

    tracing::info!(fund_id = %projection.fund_id, "Fund created");
    Ok((StatusCode::CREATED, Json(projection)))
}

/// Gets a fund by id
pub async fn get_fund(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FundProjection>, ApiError> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Fund not found.".to_string()))
}

/// Updates a fund's performance figure
pub async fn update_performance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePerformanceRequest>, JsonRejection>,
) -> Result<Json<FundProjection>, ApiError> {
    // Not-found wins over any body problem.
    if state.store.get(&id).is_none() {
        return Err(ApiError::NotFound("Fund not found".to_string()));
    }

    let Json(request) = body
        .map_err(|_| ApiError::Validation("Missing or invalid performance data.".to_string()))?;
    let raw = request
        .fund_performance
        .ok_or_else(|| ApiError::Validation("Missing or invalid performance data.".to_string()))?;
    let performance = coerce_number(&raw).ok_or_else(|| {
        ApiError::Validation("Performance data must be a valid number.".to_string())
    })?;

    let projection = state
        .store
        .update_performance(&id, performance)?
        .ok_or_else(|| ApiError::NotFound("Fund not found".to_string()))?;

    tracing::info!(fund_id = %projection.fund_id, performance, "Fund performance updated");
    Ok(Json(projection))
}

/// Deletes a fund
pub async fn delete_fund(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.remove(&id)? {
        tracing::info!(fund_id = %id, "Fund deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Fund not found".to_string()))
    }
}
