//! Liveness probe at `/health`, outside the `/api` tree.
//!
//! The store counts as healthy only when the `listings` table answers, so a
//! database that is reachable but unmigrated reports `degraded`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use listings_db::repositories::ListingRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored listings; absent when the table cannot be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_count: Option<i64>,
}

async fn report(State(state): State<AppState>) -> Json<HealthResponse> {
    let listing_count = match ListingRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Listings table unavailable");
            None
        }
    };
    let db_healthy = listing_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        listing_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
