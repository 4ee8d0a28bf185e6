//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::db::SnapshotStore;
use crate::refresh::Refresher;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot persistence, queried by the read endpoints.
    pub store: Arc<dyn SnapshotStore>,

    /// Refresh orchestrator behind `POST /staking/update`.
    pub refresher: Arc<Refresher>,
}
