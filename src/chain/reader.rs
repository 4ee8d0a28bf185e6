use std::time::Duration;

use alloy::{
    primitives::{Address, U256},
    providers::{DynProvider, ProviderBuilder},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use crate::abis::IFixedStaking;
use crate::chain::StakingSource;

/// Timeout for individual RPC calls (30 seconds)
const RPC_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC reader for fixed staking contracts.
#[derive(Clone)]
pub struct ChainReader {
    provider: DynProvider,
}

impl ChainReader {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = Url::parse(rpc_url).context("Invalid RPC URL")?;
        let provider = DynProvider::new(ProviderBuilder::new().connect_http(url));

        Ok(Self {
            provider,
        })
    }
}

#[async_trait]
impl StakingSource for ChainReader {
    async fn fixed_apy(&self, staking: Address) -> Result<u8> {
        let contract = IFixedStaking::new(staking, &self.provider);

        let apy = tokio::time::timeout(RPC_CALL_TIMEOUT, contract.fixedAPY().call())
            .await
            .context("fixedAPY call timed out")?
            .with_context(|| format!("fixedAPY call failed for {staking}"))?;

        Ok(apy)
    }

    async fn total_staked(&self, staking: Address) -> Result<U256> {
        let contract = IFixedStaking::new(staking, &self.provider);

        let staked = tokio::time::timeout(RPC_CALL_TIMEOUT, contract.totalAmountStaked().call())
            .await
            .context("totalAmountStaked call timed out")?
            .with_context(|| format!("totalAmountStaked call failed for {staking}"))?;

        Ok(staked)
    }
}
