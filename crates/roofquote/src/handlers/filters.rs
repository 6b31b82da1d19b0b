use axum::{extract::State, Json};

use roofquote_core::quote::FilterOptions;

use crate::{handlers::AppError, state::AppState};

/// Distinct values for populating filter controls (GET /api/filters).
pub async fn list_filters(State(state): State<AppState>) -> Result<Json<FilterOptions>, AppError> {
    Ok(Json(state.quote_repo.filter_options().await?))
}
