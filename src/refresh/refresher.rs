//! Refresh orchestration: reads contract state for every registered token
//! and upserts the resulting snapshots.

use std::sync::Arc;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use futures::future::join_all;
use log::{error, info};

use crate::chain::StakingSource;
use crate::config::TokenEntry;
use crate::db::models::StakingSnapshot;
use crate::db::SnapshotStore;
use crate::utils::u256_to_f64;

/// Staked amounts are normalized with six decimals across the registry.
const TVL_DECIMALS: u8 = 6;

/// Result of one token's refresh attempt.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub symbol: String,
    pub error: Option<String>,
}

impl RefreshOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate of one full refresh pass.
#[derive(Debug)]
pub struct RefreshSummary {
    pub outcomes: Vec<RefreshOutcome>,
}

impl RefreshSummary {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Fans out over the token registry, isolating failures per token.
pub struct Refresher {
    source: Arc<dyn StakingSource>,
    store: Arc<dyn SnapshotStore>,
    tokens: Vec<TokenEntry>,
    chain: String,
}

impl Refresher {
    pub fn new(
        source: Arc<dyn StakingSource>,
        store: Arc<dyn SnapshotStore>,
        tokens: Vec<TokenEntry>,
        chain: String,
    ) -> Self {
        Self {
            source,
            store,
            tokens,
            chain,
        }
    }

    /// Refreshes a single registry entry and returns the stored snapshot.
    async fn refresh_token(&self, entry: &TokenEntry) -> Result<StakingSnapshot> {
        let staking: Address = entry
            .staking
            .parse()
            .with_context(|| format!("Invalid staking address for {}", entry.symbol))?;

        let apy = self.source.fixed_apy(staking).await?;
        let staked = self.source.total_staked(staking).await?;
        let tvl = u256_to_f64(staked, TVL_DECIMALS);

        let snapshot = StakingSnapshot::new(entry, &self.chain, i32::from(apy), tvl);
        self.store.upsert(&snapshot).await?;

        Ok(snapshot)
    }

    /// Refreshes every registered token concurrently. One token failing
    /// never blocks the others; failures land in the summary and the log.
    pub async fn refresh_all(&self) -> RefreshSummary {
        info!("Starting staking refresh for {} tokens", self.tokens.len());
        let start = std::time::Instant::now();

        let tasks = self.tokens.iter().map(|entry| async move {
            match self.refresh_token(entry).await {
                Ok(snapshot) => {
                    info!(
                        "Updated {}: APY {}%, TVL {}",
                        snapshot.id_protocol, snapshot.apy, snapshot.tvl
                    );
                    RefreshOutcome {
                        symbol: entry.symbol.clone(),
                        error: None,
                    }
                },
                Err(e) => {
                    error!("Failed to refresh {}: {:#}", entry.symbol, e);
                    RefreshOutcome {
                        symbol: entry.symbol.clone(),
                        error: Some(format!("{e:#}")),
                    }
                },
            }
        });

        let outcomes = join_all(tasks).await;
        let summary = RefreshSummary {
            outcomes,
        };

        info!(
            "Staking refresh finished: {}/{} updated in {:?}",
            summary.succeeded(),
            summary.attempted(),
            start.elapsed()
        );

        summary
    }
}
