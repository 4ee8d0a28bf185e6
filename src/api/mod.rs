//! HTTP surface: read endpoints over stored snapshots plus the refresh
//! trigger.

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
