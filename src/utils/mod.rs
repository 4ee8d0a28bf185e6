//! Utility functions for the stakewatch service.
//!
//! - [`conversion`] - Fixed-point U256 to f64 normalization

mod conversion;

pub use conversion::{u256_to_f64, u256_to_f64_safe};
