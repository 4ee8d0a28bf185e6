//! Route definitions.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /staking` - All snapshots
//! - `GET /staking/protocol/{id_protocol}` - Snapshots for one protocol
//! - `GET /staking/token/{address}` - Snapshot for one token address
//! - `POST /staking/update` - Refresh every registered token

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::db::models::StakingSnapshot;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/staking", get(all_staking))
        .route("/staking/protocol/{id_protocol}", get(staking_by_protocol))
        .route("/staking/token/{address}", get(staking_by_token))
        .route("/staking/update", post(update_staking))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check response.
#[derive(Debug, Clone, serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Health check endpoint for load balancer probes.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "stakewatch",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn all_staking(
    State(state): State<AppState>,
) -> Result<Json<Vec<StakingSnapshot>>, ApiError> {
    let snapshots = state.store.all().await?;

    Ok(Json(snapshots))
}

/// Filter by protocol id. An unknown protocol is an empty list, not a 404.
async fn staking_by_protocol(
    State(state): State<AppState>,
    Path(id_protocol): Path<String>,
) -> Result<Json<Vec<StakingSnapshot>>, ApiError> {
    let snapshots = state.store.by_protocol(&id_protocol).await?;

    Ok(Json(snapshots))
}

async fn staking_by_token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<StakingSnapshot>, ApiError> {
    let snapshot = state
        .store
        .by_token(&address)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(snapshot))
}

/// Kicks off a full refresh pass. Individual token failures are logged and
/// reflected in the summary, never surfaced as an HTTP error.
async fn update_staking(State(state): State<AppState>) -> Json<Value> {
    state.refresher.refresh_all().await;

    Json(json!({ "message": "All staking data updated successfully" }))
}
