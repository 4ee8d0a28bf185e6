pub mod models;
pub mod postgres;

#[cfg(test)]
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::db::models::StakingSnapshot;

/// Persistence seam for staking snapshots.
///
/// The HTTP handlers and the refresher only talk to this trait; the
/// PostgreSQL implementation lives in [`postgres`].
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Every stored snapshot, ordered by protocol id.
    async fn all(&self) -> Result<Vec<StakingSnapshot>>;

    /// Snapshots belonging to one protocol id (e.g. `SiloV2_S`).
    async fn by_protocol(&self, id_protocol: &str) -> Result<Vec<StakingSnapshot>>;

    /// Snapshot for one token address, matched case-insensitively.
    async fn by_token(&self, address: &str) -> Result<Option<StakingSnapshot>>;

    /// Inserts a snapshot, or refreshes apy/tvl/updated_at on an existing row.
    async fn upsert(&self, snapshot: &StakingSnapshot) -> Result<()>;
}
