//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the farm:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type           | Description                          |
//! |-----------------|----------------|--------------------------------------|
//! | `RewardToken`   | `Address`      | Token paid out by `issue_tokens`     |
//! | `AllowedTokens` | `Vec<Address>` | Insertion-ordered stakeable registry |
//! | `Stakers`       | `Vec<Address>` | Append-only roster, first-stake order|
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                         | Type      | Description                       |
//! |-----------------------------|-----------|-----------------------------------|
//! | `StakeBalance(token, user)` | `i128`    | Staked amount per token per user  |
//! | `UniqueCount(user)`         | `u32`     | Distinct tokens currently staked  |
//! | `IsStaker(user)`            | `bool`    | Roster membership flag            |
//! | `PriceFeed(token)`          | `Address` | Registered feed for a token       |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. Bumps are skipped for entries that do not exist yet, since
//! extending an absent entry traps.
//!
//! ## Why a membership flag next to the roster?
//!
//! The roster is append-only and historical: a user who fully unstakes and
//! later stakes again must not appear twice. Scanning the `Stakers` vector on
//! every stake would make staking cost grow with the roster, so membership is
//! a separate O(1) flag.

use soroban_sdk::{contracttype, Address, Env, Vec};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All farm storage keys.
///
/// Instance-tier keys (`RewardToken`, `AllowedTokens`, `Stakers`) live as
/// long as the contract and are extended together. Persistent-tier keys hold
/// per-user and per-token data with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the reward token paid out on issuance (Instance).
    RewardToken,
    /// Insertion-ordered list of stakeable tokens (Instance).
    AllowedTokens,
    /// Append-only roster of everyone who has ever staked (Instance).
    Stakers,
    /// Staked amount keyed by (token, user) (Persistent).
    StakeBalance(Address, Address),
    /// Count of distinct tokens a user currently stakes (Persistent).
    UniqueCount(Address),
    /// Whether a user already appears in the roster (Persistent).
    IsStaker(Address),
    /// Price feed registered for a token (Persistent).
    PriceFeed(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Record the reward token address. Written once during `init`.
pub fn set_reward_token(env: &Env, token: &Address) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::RewardToken, token);
}

/// Read the reward token address, `None` before `init`.
pub fn get_reward_token(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::RewardToken)
}

// ─────────────────────────────────────────────────────────
// Allowed-token registry
// ─────────────────────────────────────────────────────────

/// Read the full allowed-token list in insertion order.
pub fn allowed_tokens(env: &Env) -> Vec<Address> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::AllowedTokens)
        .unwrap_or_else(|| Vec::new(env))
}

/// Append `token` to the registry. Callers must check for duplicates first.
pub fn push_allowed_token(env: &Env, token: &Address) {
    let mut tokens = allowed_tokens(env);
    tokens.push_back(token.clone());
    env.storage().instance().set(&DataKey::AllowedTokens, &tokens);
}

/// Membership test against the allowed-token registry.
pub fn is_token_allowed(env: &Env, token: &Address) -> bool {
    allowed_tokens(env).iter().any(|t| &t == token)
}

// ─────────────────────────────────────────────────────────
// Staker roster
// ─────────────────────────────────────────────────────────

/// Read the full staker roster in first-stake order.
pub fn stakers(env: &Env) -> Vec<Address> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Stakers)
        .unwrap_or_else(|| Vec::new(env))
}

/// Return `true` if `user` has ever staked.
pub fn is_staker(env: &Env, user: &Address) -> bool {
    let key = DataKey::IsStaker(user.clone());
    let flag = env.storage().persistent().get(&key).unwrap_or(false);
    if flag {
        bump_persistent(env, &key);
    }
    flag
}

/// Append `user` to the roster and set the membership flag.
/// Callers must check [`is_staker`] first; the roster holds no duplicates.
pub fn mark_staker(env: &Env, user: &Address) {
    let mut roster = stakers(env);
    roster.push_back(user.clone());
    env.storage().instance().set(&DataKey::Stakers, &roster);

    let key = DataKey::IsStaker(user.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key that is known to exist.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Staking balances
// ─────────────────────────────────────────────────────────

/// Retrieve the staked balance of `user` for `token`, 0 if never staked.
pub fn get_stake_balance(env: &Env, token: &Address, user: &Address) -> i128 {
    let key = DataKey::StakeBalance(token.clone(), user.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

/// Set the staked balance of `user` for `token`.
pub fn set_stake_balance(env: &Env, token: &Address, user: &Address, balance: i128) {
    let key = DataKey::StakeBalance(token.clone(), user.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Unique-token counts
// ─────────────────────────────────────────────────────────

/// Count of distinct tokens `user` currently stakes, 0 if unknown.
pub fn get_unique_count(env: &Env, user: &Address) -> u32 {
    let key = DataKey::UniqueCount(user.clone());
    match env.storage().persistent().get(&key) {
        Some(count) => {
            bump_persistent(env, &key);
            count
        }
        None => 0,
    }
}

/// Set the distinct-token count for `user`.
pub fn set_unique_count(env: &Env, user: &Address, count: u32) {
    let key = DataKey::UniqueCount(user.clone());
    env.storage().persistent().set(&key, &count);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Price feed mapping
// ─────────────────────────────────────────────────────────

/// Read the feed registered for `token`, `None` if unset.
pub fn get_price_feed(env: &Env, token: &Address) -> Option<Address> {
    let key = DataKey::PriceFeed(token.clone());
    let feed: Option<Address> = env.storage().persistent().get(&key);
    if feed.is_some() {
        bump_persistent(env, &key);
    }
    feed
}

/// Register `feed` for `token`, overwriting any prior registration.
pub fn set_price_feed(env: &Env, token: &Address, feed: &Address) {
    let key = DataKey::PriceFeed(token.clone());
    env.storage().persistent().set(&key, feed);
    bump_persistent(env, &key);
}
