//! # Carlot Server
//!
//! HTTP shell for the Carlot vehicle catalog.
//!
//! ## Overview
//!
//! The server translates HTTP requests into catalog store calls and renders
//! the results as JSON or raw bytes:
//!
//! - **Catalog browsing**: the joined listing view with optional filtering
//! - **Listing submission**: multipart form posts creating a full listing
//! - **Image serving**: stored image bytes streamed back as binary responses
//! - **Landing content**: promotional carousel payload for the home page
//! - **Dev seeding**: sample-data endpoints for development and testing
//!
//! ## Architecture
//!
//! The server is built on Axum and uses a single SQLite file (via
//! `carlot-core`) for persistent storage.

pub mod api_types;
pub mod catalog_handlers;
pub mod dev_handlers;
pub mod errors;
pub mod home_handlers;
pub mod image_handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the full application router with middleware applied.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::create_api_router())
        .route("/images/{id}", get(image_handlers::serve_image_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
