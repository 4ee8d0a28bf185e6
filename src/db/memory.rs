//! In-memory [`SnapshotStore`] used by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::db::models::StakingSnapshot;
use crate::db::SnapshotStore;

/// Test double mirroring the PostgreSQL upsert semantics: an existing row
/// only has its apy, tvl and updated_at replaced.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<String, StakingSnapshot>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every store call fail until switched back off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Seeds a row directly, bypassing the upsert merge rules.
    pub fn seed(&self, snapshot: StakingSnapshot) {
        self.rows
            .lock()
            .unwrap()
            .insert(snapshot.address_token.clone(), snapshot);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("memory store failure injected"));
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn all(&self) -> Result<Vec<StakingSnapshot>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let mut all: Vec<StakingSnapshot> = rows.values().cloned().collect();
        all.sort_by(|a, b| a.id_protocol.cmp(&b.id_protocol));
        Ok(all)
    }

    async fn by_protocol(&self, id_protocol: &str) -> Result<Vec<StakingSnapshot>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let mut matches: Vec<StakingSnapshot> = rows
            .values()
            .filter(|s| s.id_protocol == id_protocol)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.address_token.cmp(&b.address_token));
        Ok(matches)
    }

    async fn by_token(&self, address: &str) -> Result<Option<StakingSnapshot>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&address.to_lowercase()).cloned())
    }

    async fn upsert(&self, snapshot: &StakingSnapshot) -> Result<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&snapshot.address_token) {
            Some(existing) => {
                existing.apy = snapshot.apy;
                existing.tvl = snapshot.tvl;
                existing.updated_at = snapshot.updated_at;
            }
            None => {
                rows.insert(snapshot.address_token.clone(), snapshot.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenEntry;

    fn snapshot(symbol: &str, project: &str, apy: i32) -> StakingSnapshot {
        let entry = TokenEntry {
            symbol: symbol.to_string(),
            token: format!("0xA{:0>39}", symbol.to_lowercase()),
            staking: format!("0xB{:0>39}", symbol.to_lowercase()),
            name_project: project.to_string(),
            stablecoin: false,
            logo: String::new(),
        };
        StakingSnapshot::new(&entry, "Sonic Blaze Testnet", apy, 100.0)
    }

    #[tokio::test]
    async fn test_upsert_only_touches_mutable_columns() {
        let store = MemoryStore::new();
        let first = snapshot("S", "SiloV2", 5);
        store.upsert(&first).await.unwrap();

        let mut second = snapshot("S", "SiloV2", 9);
        second.tvl = 777.0;
        second.logo = "https://example.com/changed.png".to_string();
        store.upsert(&second).await.unwrap();

        let stored = store
            .by_token(&first.address_token)
            .await
            .unwrap()
            .expect("row should exist");
        assert_eq!(stored.apy, 9);
        assert_eq!(stored.tvl, 777.0);
        // Immutable columns keep their original values.
        assert_eq!(stored.logo, "");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_token_lookup_is_case_insensitive() {
        let store = MemoryStore::new();
        let row = snapshot("S", "SiloV2", 5);
        store.upsert(&row).await.unwrap();

        let upper = row.address_token.to_uppercase().replace("0X", "0x");
        let found = store.by_token(&upper).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = MemoryStore::new();
        store.set_failing(true);
        assert!(store.all().await.is_err());

        store.set_failing(false);
        assert!(store.all().await.unwrap().is_empty());
    }
}
