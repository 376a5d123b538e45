//! Lottery rules as plain Rust over the `Lottery` account. Instructions feed
//! the on-chain ports in; tests feed stubs.

mod access;
mod ports;
mod randomness;
mod registry;
mod selector;
mod settlement;
mod tiers;

#[cfg(test)]
pub(crate) mod testing;

pub use ports::*;
pub use randomness::normalize_salt;
pub(crate) use selector::Budget;
pub use selector::candidate_offset;
pub use settlement::Payouts;
pub use tiers::{organization_quotas, validate_tiers};
