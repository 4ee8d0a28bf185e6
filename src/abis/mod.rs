pub mod staking;

pub use staking::IFixedStaking;
