mod config;

pub use config::{PostgresSettings, RpcSettings, ServerSettings, Settings, TokenEntry};
