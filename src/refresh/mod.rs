mod refresher;

pub use refresher::{RefreshOutcome, RefreshSummary, Refresher};
