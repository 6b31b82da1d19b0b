use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        filters::list_filters,
        health::{livez, readyz},
        quotes::{list_quotes, submit_quote},
        stats::{by_state, monthly_trend, roof_size_by_type, summary},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // Any origin may call any route
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/filters", get(list_filters))
        .route("/quotes", get(list_quotes).post(submit_quote))
        .route("/stats/summary", get(summary))
        .route("/stats/by-state", get(by_state))
        .route("/stats/roof-size-type", get(roof_size_by_type))
        .route("/stats/monthly-trend", get(monthly_trend));

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
