use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// HTTP listener configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Remote node configuration.
///
/// One JSON-RPC endpoint serves every staking contract read; the chain
/// label is stored verbatim on each snapshot.
#[derive(Debug, Deserialize, Clone)]
pub struct RpcSettings {
    pub url: String,
    #[serde(default = "default_chain")]
    pub chain: String,
}

fn default_chain() -> String {
    "Sonic Blaze Testnet".to_string()
}

/// PostgreSQL database connection configuration.
///
/// Stores the staking snapshots table.
#[derive(Debug, Deserialize, Clone)]
pub struct PostgresSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_pool_size() -> usize {
    16
}

/// One registered token: its on-chain addresses and display metadata.
///
/// The registry is pure data so listing a new protocol means adding a row
/// here, not touching code. `stablecoin` adds the "Stablecoin" category to
/// the token's snapshots; `logo` may be left empty.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TokenEntry {
    pub symbol: String,
    pub token: String,
    pub staking: String,
    pub name_project: String,
    #[serde(default)]
    pub stablecoin: bool,
    #[serde(default)]
    pub logo: String,
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup; any value can be overridden with
/// a `STAKEWATCH`-prefixed environment variable (e.g. `STAKEWATCH__RPC__URL`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub rpc: RpcSettings,
    pub postgres: PostgresSettings,
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("STAKEWATCH").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
