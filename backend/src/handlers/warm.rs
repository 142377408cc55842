//! Cache warming endpoint

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};

use crate::error::{AppError, AppResult};
use crate::models::WarmSummary;
use crate::services::orchestrator::FetchPolicy;
use crate::services::warm::warm_all;
use crate::AppState;

const SECRET_HEADER: &str = "x-warm-secret";

/// Prime the forecast cache for every region over the upcoming two
/// weekends. Guarded by a shared secret when one is configured.
pub async fn warm_cache(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<WarmSummary>> {
    authorize(&headers, state.config.warm.secret.as_deref())?;

    let policy = FetchPolicy::for_warm(&state.config.rank, &state.config.warm);
    let forecast = Arc::new(state.forecast.clone());
    let summary = warm_all(&state.regions, &forecast, &policy).await;
    Ok(Json(summary))
}

fn authorize(headers: &HeaderMap, secret: Option<&str>) -> AppResult<()> {
    let Some(expected) = secret else {
        // No secret configured: endpoint is open (development setups)
        return Ok(());
    };
    let provided = headers
        .get(SECRET_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if provided == expected {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn open_when_no_secret_configured() {
        assert!(authorize(&HeaderMap::new(), None).is_ok());
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let err = authorize(&HeaderMap::new(), Some("hunter2")).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn matching_header_is_authorized() {
        let mut headers = HeaderMap::new();
        headers.insert(SECRET_HEADER, HeaderValue::from_static("hunter2"));
        assert!(authorize(&headers, Some("hunter2")).is_ok());
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let mut headers = HeaderMap::new();
        headers.insert(SECRET_HEADER, HeaderValue::from_static("nope"));
        assert!(authorize(&headers, Some("hunter2")).is_err());
    }
}
