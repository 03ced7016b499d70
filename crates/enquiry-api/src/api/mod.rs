//! HTTP API for the enquiry service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState};
pub use types::*;

use crate::store::RecordStore;
use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Room for a 5 MiB CV plus multipart framing overhead.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Submission record store
    pub store: Arc<RwLock<RecordStore>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Create the API router with the default rate limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(60))
}

/// Create the API router with custom rate limiting.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Create operations, one per form flow
        .route("/v1/enquiries", post(handlers::create_enquiry))
        .route("/v1/in-house-requests", post(handlers::create_in_house_request))
        .route(
            "/v1/career-applications",
            post(handlers::create_career_application),
        )
        .route("/v1/registrations", post(handlers::create_registration))
        .route("/v1/invoice-requests", post(handlers::create_invoice_request))
        // Back-office counts
        .route("/v1/records", get(handlers::list_records))
        .layer(axum_middleware::from_fn_with_state(
            rate_limit.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
