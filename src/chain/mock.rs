//! Scriptable [`StakingSource`] used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy::primitives::{Address, U256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::chain::StakingSource;

/// Per-contract scripted responses. Unscripted addresses error, mimicking
/// a revert on a missing contract.
#[derive(Default)]
pub struct MockSource {
    responses: Mutex<HashMap<Address, (u8, U256)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, staking: Address, apy: u8, total_staked: U256) {
        self.responses
            .lock()
            .unwrap()
            .insert(staking, (apy, total_staked));
    }
}

#[async_trait]
impl StakingSource for MockSource {
    async fn fixed_apy(&self, staking: Address) -> Result<u8> {
        self.responses
            .lock()
            .unwrap()
            .get(&staking)
            .map(|(apy, _)| *apy)
            .ok_or_else(|| anyhow!("execution reverted: no contract at {staking}"))
    }

    async fn total_staked(&self, staking: Address) -> Result<U256> {
        self.responses
            .lock()
            .unwrap()
            .get(&staking)
            .map(|(_, staked)| *staked)
            .ok_or_else(|| anyhow!("execution reverted: no contract at {staking}"))
    }
}
