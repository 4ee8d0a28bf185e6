use async_trait::async_trait;
use log::error;
use tokio_postgres::Row;

use crate::db::models::StakingSnapshot;
use crate::db::postgres::PostgresClient;
use crate::db::SnapshotStore;

fn row_to_snapshot(row: &Row) -> StakingSnapshot {
    // Lowercase all address fields for consistent comparisons
    let address_token: String = row.get("address_token");
    let address_staking: String = row.get("address_staking");

    StakingSnapshot {
        address_token: address_token.to_lowercase(),
        id_protocol: row.get("id_protocol"),
        address_staking: address_staking.to_lowercase(),
        name_token: row.get("name_token"),
        name_project: row.get("name_project"),
        chain: row.get("chain"),
        apy: row.get("apy"),
        tvl: row.get("tvl"),
        stablecoin: row.get("stablecoin"),
        categories: row.get("categories"),
        logo: row.get("logo"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl SnapshotStore for PostgresClient {
    async fn all(&self) -> anyhow::Result<Vec<StakingSnapshot>> {
        let client = self.pool.get().await?;
        let query = r#"
            SELECT
                address_token, id_protocol, address_staking, name_token, name_project,
                chain, apy, tvl, stablecoin, categories, logo, updated_at
            FROM staking.snapshots
            ORDER BY id_protocol
        "#;

        let rows = client.query(query, &[]).await?;

        Ok(rows.iter().map(row_to_snapshot).collect())
    }

    async fn by_protocol(&self, id_protocol: &str) -> anyhow::Result<Vec<StakingSnapshot>> {
        let client = self.pool.get().await?;
        let query = r#"
            SELECT
                address_token, id_protocol, address_staking, name_token, name_project,
                chain, apy, tvl, stablecoin, categories, logo, updated_at
            FROM staking.snapshots
            WHERE id_protocol = $1
            ORDER BY address_token
        "#;

        let rows = client.query(query, &[&id_protocol]).await?;

        Ok(rows.iter().map(row_to_snapshot).collect())
    }

    async fn by_token(&self, address: &str) -> anyhow::Result<Option<StakingSnapshot>> {
        let client = self.pool.get().await?;
        let query = r#"
            SELECT
                address_token, id_protocol, address_staking, name_token, name_project,
                chain, apy, tvl, stablecoin, categories, logo, updated_at
            FROM staking.snapshots
            WHERE address_token = $1
        "#;

        let address = address.to_lowercase();
        let row = client.query_opt(query, &[&address]).await?;

        Ok(row.as_ref().map(row_to_snapshot))
    }

    async fn upsert(&self, snapshot: &StakingSnapshot) -> anyhow::Result<()> {
        let client = self.pool.get().await?;
        let query = r#"
            INSERT INTO staking.snapshots (
                address_token, id_protocol, address_staking, name_token, name_project,
                chain, apy, tvl, stablecoin, categories, logo, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (address_token) DO UPDATE SET
                apy = EXCLUDED.apy,
                tvl = EXCLUDED.tvl,
                updated_at = EXCLUDED.updated_at
        "#;

        client
            .execute(
                query,
                &[
                    &snapshot.address_token,
                    &snapshot.id_protocol,
                    &snapshot.address_staking,
                    &snapshot.name_token,
                    &snapshot.name_project,
                    &snapshot.chain,
                    &snapshot.apy,
                    &snapshot.tvl,
                    &snapshot.stablecoin,
                    &snapshot.categories,
                    &snapshot.logo,
                    &snapshot.updated_at,
                ],
            )
            .await
            .map_err(|e| {
                error!(
                    "Failed to upsert snapshot {}: {:?}",
                    snapshot.address_token, e
                );
                e
            })?;

        Ok(())
    }
}
