//! # Types
//!
//! Shared data structures used across all modules of the token farm.
//!
//! ## Design decisions
//!
//! ### `PriceData` as the oracle answer format
//!
//! The farm never interprets a feed address itself — it invokes
//! `latest_round_data` on whatever contract the owner registered for a token
//! and expects a [`PriceData`] back. Any contract that returns this struct
//! (price plus the fixed-point scale it is expressed in) can act as a feed,
//! which is what lets the test fixture stand in for a production oracle.
//!
//! ### Snapshot types
//!
//! [`TokenValue`] / [`UserValues`] exist only for read-only convenience
//! queries; they are reconstructed on demand and never stored.

use soroban_sdk::{contracttype, Address, Vec};

/// A price observation as reported by a feed contract.
///
/// `price` is a fixed-point integer scaled by `10^decimals`. A feed quoting
/// 2000 with 18 decimals reports `price = 2000 * 10^18, decimals = 18`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
}

/// Valuation of a single staked token — returned by `get_user_values`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenValue {
    pub token: Address,
    pub value: i128,
}

/// Full per-token valuation view for one user.
#[contracttype]
#[derive(Clone, Debug)]
pub struct UserValues {
    pub user: Address,
    pub values: Vec<TokenValue>,
}
