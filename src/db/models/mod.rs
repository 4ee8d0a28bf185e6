mod snapshot;

pub use snapshot::{StakingSnapshot, CATEGORY_STABLECOIN, CATEGORY_STAKING};
