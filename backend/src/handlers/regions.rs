//! Single-region lookup endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};

use shared::DatePreset;

use crate::error::AppResult;
use crate::handlers::rank::{resolve_params, RankQuery};
use crate::models::RankedRegion;
use crate::services::orchestrator::FetchPolicy;
use crate::services::rank::RankService;
use crate::AppState;

/// Score one region by id. Defaults to tomorrow's window and retries
/// harder than the list endpoint since there is no partial-result
/// fallback: a fetch failure surfaces as 503.
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
    Query(query): Query<RankQuery>,
) -> AppResult<Json<RankedRegion>> {
    let params = resolve_params(&query, DatePreset::Tomorrow)?;
    let policy = FetchPolicy::for_lookup(&state.config.rank);
    let service = RankService::new(state.regions.clone(), state.forecast.clone());
    let result = service.lookup(&region_id, &params, &policy).await?;
    Ok(Json(result))
}
