//! Quote submission and listing handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use roofquote_core::quote::{NewQuote, Quote, QuoteFilter};

use crate::{
    handlers::{
        error::{bad_query, bad_request},
        AppError,
    },
    state::AppState,
};

/// Confirmation returned after a submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

pub const SUBMIT_MESSAGE: &str = "Quote submitted successfully";

/// Submit a new quote (POST /api/quotes).
///
/// Responds 201 with a fixed message; the assigned id is only logged.
pub async fn submit_quote(
    State(state): State<AppState>,
    payload: Result<Json<NewQuote>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(quote) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(bad_request(rejection)),
    };

    let id = state.quote_repo.create_quote(&quote).await?;

    tracing::info!(
        quote_id = id,
        state = quote.state.as_deref().unwrap_or_default(),
        roof_type = quote.roof_type.as_deref().unwrap_or_default(),
        "Quote submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: SUBMIT_MESSAGE,
        }),
    )
        .into_response())
}

/// List quotes, optionally filtered by `state` and `roofType` (GET /api/quotes).
pub async fn list_quotes(
    State(state): State<AppState>,
    query: Result<Query<QuoteFilter>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(filter) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(bad_query(rejection)),
    };

    let quotes: Vec<Quote> = state.quote_repo.list_quotes(&filter).await?;

    tracing::debug!(count = quotes.len(), ?filter, "Listed quotes");

    Ok(Json(quotes).into_response())
}
