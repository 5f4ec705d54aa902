//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// The route surface is flat and unversioned, matching what the frontend
/// expects.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Plant CRUD
        .route("/plants", get(handlers::list_plants))
        .route("/plants", post(handlers::create_plant))
        .route("/plants/{plant_id}", get(handlers::get_plant))
        .route("/plants/{plant_id}", put(handlers::update_plant))
        .route("/plants/{plant_id}", delete(handlers::delete_plant))
        // Reading ingestion and lookup
        .route("/readings", post(handlers::create_reading))
        .route("/readings/{plant_id}", get(handlers::list_readings))
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
