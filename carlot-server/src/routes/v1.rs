use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, catalog_handlers, dev_handlers, home_handlers};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home_handlers::home_content))
        .route("/catalog", get(catalog_handlers::list_catalog_handler))
        .route("/listings", post(catalog_handlers::create_listing_handler))
        // Dev endpoints for populating a fresh store
        .route("/dev/seed-sample", get(dev_handlers::seed_sample))
        .route("/dev/seed-fleet", get(dev_handlers::seed_fleet))
}
