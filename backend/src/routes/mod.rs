//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// All `/api/v1` routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/rank", get(handlers::rank::rank_regions))
        .route("/regions/:region_id", get(handlers::regions::get_region))
        .route("/warm", post(handlers::warm::warm_cache))
}
