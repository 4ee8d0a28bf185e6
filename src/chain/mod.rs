mod reader;

#[cfg(test)]
pub mod mock;

use alloy::primitives::{Address, U256};
use anyhow::Result;
use async_trait::async_trait;

pub use reader::ChainReader;

/// Read access to staking contract state.
///
/// [`ChainReader`] implements this over JSON-RPC; tests script their own
/// source instead of talking to a node.
#[async_trait]
pub trait StakingSource: Send + Sync {
    /// The contract's advertised fixed APY, in whole percent.
    async fn fixed_apy(&self, staking: Address) -> Result<u8>;

    /// Total amount staked, in the token's smallest unit.
    async fn total_staked(&self, staking: Address) -> Result<U256>;
}
