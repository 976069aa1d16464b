//! Route definitions
//!
//! Inquiry routes are mounted at the root alongside the health probes.

use axum::{routing::get, Router};

use crate::handlers::{health, inquiries};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(inquiry_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Inquiry routes
fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/inquiries",
            get(inquiries::list_inquiries).post(inquiries::create_inquiry),
        )
        // Static segment, matched ahead of `:id`
        .route("/inquiries/statistics", get(inquiries::get_statistics))
        .route(
            "/inquiries/:id",
            get(inquiries::get_inquiry)
                .put(inquiries::update_inquiry)
                .patch(inquiries::update_inquiry)
                .delete(inquiries::delete_inquiry),
        )
}
