pub mod abis;
pub mod api;
pub mod chain;
pub mod config;
pub mod db;
pub mod refresh;
pub mod utils;

pub use api::{router, AppState};
pub use chain::{ChainReader, StakingSource};
pub use config::Settings;
pub use db::postgres::PostgresClient;
pub use db::SnapshotStore;
pub use refresh::Refresher;
