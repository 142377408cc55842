//! CragCast - UK climbing-weather ranking backend
//!
//! Ranks UK outdoor-climbing regions by forecasted weather suitability:
//! a stale-while-revalidate cache in front of Open-Meteo, a bounded
//! concurrent fetch orchestrator, and a deterministic scoring pipeline.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use shared::Region;

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use cache::{ForecastStore, MemoryStore};
use error::AppResult;
use external::OpenMeteoClient;
use services::forecast::{CacheSettings, ForecastService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub regions: Arc<Vec<Region>>,
    pub forecast: ForecastService,
}

impl AppState {
    /// Assemble state from configuration: HTTP client, cache store and the
    /// static region catalog.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let client = OpenMeteoClient::new(&config.weather.api_endpoint)?;
        let store: Option<Arc<dyn ForecastStore>> = if config.cache.enabled {
            Some(Arc::new(MemoryStore::new()))
        } else {
            None
        };
        let forecast = ForecastService::new(client, store, CacheSettings::from(&config.cache));

        Ok(Self {
            config: Arc::new(config),
            regions: Arc::new(catalog::uk_regions()),
            forecast,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "CragCast API v1.0"
}
