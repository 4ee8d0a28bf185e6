use chrono::{DateTime, Utc};

use crate::config::TokenEntry;

/// Category attached to every snapshot.
pub const CATEGORY_STAKING: &str = "Staking";
/// Extra category for tokens flagged as stablecoins in the registry.
pub const CATEGORY_STABLECOIN: &str = "Stablecoin";

/// One token's current staking state (PostgreSQL)
///
/// Primary Key: address_token
/// Query Pattern: "Get APY/TVL for token X" / "List everything protocol Y runs"
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingSnapshot {
    // Primary key
    pub address_token: String,

    // Registry metadata (immutable per row)
    pub id_protocol: String,
    pub address_staking: String,
    pub name_token: String,
    pub name_project: String,
    pub chain: String,

    // On-chain state, overwritten on every refresh
    pub apy: i32,
    pub tvl: f64,

    // Display metadata
    pub stablecoin: bool,
    pub categories: Vec<String>,
    pub logo: String,

    // Refresh tracking
    pub updated_at: DateTime<Utc>,
}

impl StakingSnapshot {
    /// Builds a snapshot from a registry row plus freshly read chain state.
    pub fn new(entry: &TokenEntry, chain: &str, apy: i32, tvl: f64) -> Self {
        let mut categories = vec![CATEGORY_STAKING.to_string()];
        if entry.stablecoin {
            categories.push(CATEGORY_STABLECOIN.to_string());
        }

        Self {
            // Always lowercase addresses for consistent comparisons
            address_token: entry.token.to_lowercase(),
            id_protocol: format!("{}_{}", entry.name_project, entry.symbol),
            address_staking: entry.staking.to_lowercase(),
            name_token: entry.symbol.clone(),
            name_project: entry.name_project.clone(),
            chain: chain.to_string(),
            apy,
            tvl,
            stablecoin: entry.stablecoin,
            categories,
            logo: entry.logo.clone(),
            updated_at: Utc::now(),
        }
    }
}
