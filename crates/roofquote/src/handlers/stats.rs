//! Statistics handlers.
//!
//! Every endpoint accepts the same optional `state`, `roof_type` and `year`
//! query parameters. Grouped results are JSON objects with ascending keys.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use roofquote_core::quote::StatsFilter;

use crate::{
    handlers::{error::bad_query, AppError},
    state::AppState,
};

type FilterQuery = Result<Query<StatsFilter>, QueryRejection>;

/// Totals, average roof size and most common roof type (GET /api/stats/summary).
pub async fn summary(
    State(state): State<AppState>,
    query: FilterQuery,
) -> Result<Response, AppError> {
    let Query(filter) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(bad_query(rejection)),
    };
    Ok(Json(state.quote_repo.summary(&filter).await?).into_response())
}

/// Quote count per state (GET /api/stats/by-state).
pub async fn by_state(
    State(state): State<AppState>,
    query: FilterQuery,
) -> Result<Response, AppError> {
    let Query(filter) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(bad_query(rejection)),
    };
    Ok(Json(state.quote_repo.count_by_state(&filter).await?).into_response())
}

/// Mean roof size per roof type (GET /api/stats/roof-size-type).
pub async fn roof_size_by_type(
    State(state): State<AppState>,
    query: FilterQuery,
) -> Result<Response, AppError> {
    let Query(filter) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(bad_query(rejection)),
    };
    Ok(Json(state.quote_repo.average_size_by_roof_type(&filter).await?).into_response())
}

/// Quote count per `YYYY-MM` month, ascending (GET /api/stats/monthly-trend).
pub async fn monthly_trend(
    State(state): State<AppState>,
    query: FilterQuery,
) -> Result<Response, AppError> {
    let Query(filter) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(bad_query(rejection)),
    };
    Ok(Json(state.quote_repo.monthly_trend(&filter).await?).into_response())
}
