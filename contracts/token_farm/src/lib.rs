//! # Token Farm Contract
//!
//! This is the root crate of the **token farm**, a multi-token staking ledger
//! with price-feed valuation. It exposes the single Soroban contract
//! [`TokenFarm`] whose entry points cover the full staking lifecycle:
//!
//! | Phase      | Entry Point(s)                                              |
//! |------------|-------------------------------------------------------------|
//! | Bootstrap  | [`TokenFarm::init`]                                         |
//! | Admin      | `add_allowed_token`, `set_price_feed`                       |
//! | Staking    | [`TokenFarm::stake_tokens`], [`TokenFarm::unstake_tokens`]  |
//! | Valuation  | `get_token_price`, `get_user_single_token_value`, `get_user_total_value` |
//! | Rewards    | [`TokenFarm::issue_tokens`]                                 |
//! | Queries    | `allowed_tokens`, `stakers`, `staking_balance`, `unique_tokens_staked`, ... |
//!
//! ## Architecture
//!
//! Owner gating is fully delegated to [`access`]. Storage access is fully
//! delegated to [`storage`]. This file contains **only** the public entry
//! points, the valuation arithmetic, and event emissions.
//!
//! ## Valuation model
//!
//! Each allowed token may have a price feed registered for it. A feed is any
//! contract answering `latest_round_data()` with a [`PriceData`] — a
//! fixed-point price and the number of decimals it is scaled by. A user's
//! value in one token is `balance * price / 10^decimals` (truncating integer
//! division); their total value is the sum over all allowed tokens. Reward
//! issuance pays each staker their total value in the farm's reward token.
//!
//! ## Atomicity
//!
//! Every entry point executes as one host transaction: any panic — a failed
//! owner check, a rejected token transfer inside a sub-call, an arithmetic
//! overflow — reverts all storage writes made during the invocation. There
//! is no partial stake, unstake, or issuance state.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, Symbol, Val, Vec,
};

pub mod access;
pub mod events;
mod storage;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{PriceData, TokenValue, UserValues};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    TokenNotAllowed = 5,
    DuplicateToken = 6,
    NothingStaked = 7,
    PriceFeedNotSet = 8,
    Overflow = 9,
    IndexOutOfBounds = 10,
}

#[contract]
pub struct TokenFarm;

#[contractimpl]
impl TokenFarm {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the farm, fixing the owner and the reward token.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` must sign the transaction and holds the admin privilege
    ///   for the lifetime of the contract (no transfer operation exists).
    /// - `reward_token` is the token paid out by [`TokenFarm::issue_tokens`];
    ///   the farm transfers rewards from its own balance of it.
    pub fn init(env: Env, owner: Address, reward_token: Address) {
        owner.require_auth();
        access::init_owner(&env, &owner);
        storage::set_reward_token(&env, &reward_token);
    }

    // ─────────────────────────────────────────────────────────
    // Registry & admin
    // ─────────────────────────────────────────────────────────

    /// Append `token` to the allowed-token registry.
    ///
    /// - `caller` must be the owner.
    /// - Re-adding a known token panics with `Error::DuplicateToken`.
    pub fn add_allowed_token(env: Env, caller: Address, token: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);

        if storage::is_token_allowed(&env, &token) {
            panic_with_error!(&env, Error::DuplicateToken);
        }
        storage::push_allowed_token(&env, &token);
        events::emit_token_added(&env, token);
    }

    /// Register `feed` as the price feed for `token`, overwriting any prior
    /// registration.
    ///
    /// - `caller` must be the owner.
    /// - The feed may be registered before or after the token is allowed;
    ///   valuation requires both.
    pub fn set_price_feed(env: Env, caller: Address, token: Address, feed: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);

        storage::set_price_feed(&env, &token, &feed);
        events::emit_price_feed_set(&env, token, feed);
    }

    /// Return `true` if `token` is in the allowed-token registry.
    pub fn token_is_allowed(env: Env, token: Address) -> bool {
        storage::is_token_allowed(&env, &token)
    }

    // ─────────────────────────────────────────────────────────
    // Staking
    // ─────────────────────────────────────────────────────────

    /// Stake `amount` of `token`.
    ///
    /// Pulls the tokens from `staker` into the farm's custody and updates the
    /// bookkeeping in the same transaction:
    ///
    /// - `amount` must be positive (`Error::InvalidAmount`).
    /// - `token` must be allowed (`Error::TokenNotAllowed`).
    /// - The token transfer itself traps if `staker` lacks balance or
    ///   authorisation, reverting the whole call.
    /// - The first nonzero stake of a given token bumps the staker's
    ///   unique-token count; the first stake ever appends them to the roster.
    pub fn stake_tokens(env: Env, staker: Address, token: Address, amount: i128) {
        staker.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        if !storage::is_token_allowed(&env, &token) {
            panic_with_error!(&env, Error::TokenNotAllowed);
        }

        // Pull the stake into custody before touching the books.
        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&staker, &env.current_contract_address(), &amount);

        let prior = storage::get_stake_balance(&env, &token, &staker);
        let new_balance = match prior.checked_add(amount) {
            Some(b) => b,
            None => panic_with_error!(&env, Error::Overflow),
        };
        storage::set_stake_balance(&env, &token, &staker, new_balance);

        // 0 → nonzero transition: one more distinct token for this staker.
        if prior == 0 {
            let count = storage::get_unique_count(&env, &staker);
            storage::set_unique_count(&env, &staker, count + 1);
        }

        if !storage::is_staker(&env, &staker) {
            storage::mark_staker(&env, &staker);
        }

        events::emit_tokens_staked(&env, staker, token, amount);
    }

    /// Withdraw the full staked balance of `token` back to `staker`.
    ///
    /// - Panics with `Error::NothingStaked` if the balance is zero.
    /// - Resets the balance to zero and decrements the unique-token count.
    /// - The staker stays in the roster; it records everyone who has ever
    ///   staked, not current participation.
    ///
    /// Returns the withdrawn amount.
    pub fn unstake_tokens(env: Env, staker: Address, token: Address) -> i128 {
        staker.require_auth();

        let balance = storage::get_stake_balance(&env, &token, &staker);
        if balance == 0 {
            panic_with_error!(&env, Error::NothingStaked);
        }

        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&env.current_contract_address(), &staker, &balance);

        storage::set_stake_balance(&env, &token, &staker, 0);

        // Balance was nonzero, so the count is at least 1.
        let count = storage::get_unique_count(&env, &staker);
        storage::set_unique_count(&env, &staker, count - 1);

        events::emit_tokens_unstaked(&env, staker, token, balance);
        balance
    }

    // ─────────────────────────────────────────────────────────
    // Valuation
    // ─────────────────────────────────────────────────────────

    /// Query the registered feed for `token`.
    ///
    /// Panics with `Error::PriceFeedNotSet` if no feed is registered.
    pub fn get_token_price(env: Env, token: Address) -> PriceData {
        let feed = match storage::get_price_feed(&env, &token) {
            Some(feed) => feed,
            None => panic_with_error!(&env, Error::PriceFeedNotSet),
        };
        Self::fetch_price(&env, &feed)
    }

    /// Value of `user`'s staked balance of `token`:
    /// `balance * price / 10^decimals`, truncating. Returns 0 for a zero
    /// balance without consulting the feed.
    pub fn get_user_single_token_value(env: Env, user: Address, token: Address) -> i128 {
        Self::single_token_value(&env, &user, &token)
    }

    /// Alias of [`TokenFarm::get_user_single_token_value`], kept under the
    /// name external integrations query it by.
    pub fn get_user_token_staking_balance_value(env: Env, user: Address, token: Address) -> i128 {
        Self::single_token_value(&env, &user, &token)
    }

    /// Total value of `user`'s stakes summed over every allowed token.
    /// Returns 0 for a user with no tokens currently staked.
    pub fn get_user_total_value(env: Env, user: Address) -> i128 {
        Self::total_value(&env, &user)
    }

    /// Per-token valuation snapshot for `user` across all allowed tokens.
    pub fn get_user_values(env: Env, user: Address) -> UserValues {
        let mut values: Vec<TokenValue> = Vec::new(&env);
        for token in storage::allowed_tokens(&env).iter() {
            let value = Self::single_token_value(&env, &user, &token);
            values.push_back(TokenValue { token, value });
        }
        UserValues { user, values }
    }

    // ─────────────────────────────────────────────────────────
    // Reward issuance
    // ─────────────────────────────────────────────────────────

    /// Pay every staker their total staked value in the reward token.
    ///
    /// - `caller` must be the owner.
    /// - Iterates the roster in first-stake order; stakers with zero total
    ///   value are skipped.
    /// - Rewards come out of the farm's own reward-token balance; an
    ///   insufficient balance traps mid-roster and reverts every payout of
    ///   the invocation, so issuance is all-or-nothing.
    pub fn issue_tokens(env: Env, caller: Address) {
        caller.require_auth();
        access::require_owner(&env, &caller);

        let reward_token = match storage::get_reward_token(&env) {
            Some(token) => token,
            None => panic_with_error!(&env, Error::NotInitialized),
        };
        let reward_client = token::Client::new(&env, &reward_token);

        for staker in storage::stakers(&env).iter() {
            let value = Self::total_value(&env, &staker);
            if value > 0 {
                reward_client.transfer(&env.current_contract_address(), &staker, &value);
                events::emit_reward_issued(&env, staker, value);
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Read-only queries
    // ─────────────────────────────────────────────────────────

    /// The allowed token at `index`, in insertion order.
    pub fn allowed_token(env: Env, index: u32) -> Address {
        match storage::allowed_tokens(&env).get(index) {
            Some(token) => token,
            None => panic_with_error!(&env, Error::IndexOutOfBounds),
        }
    }

    /// The full allowed-token registry in insertion order.
    pub fn allowed_tokens(env: Env) -> Vec<Address> {
        storage::allowed_tokens(&env)
    }

    /// Staked balance of `user` for `token`.
    pub fn staking_balance(env: Env, token: Address, user: Address) -> i128 {
        storage::get_stake_balance(&env, &token, &user)
    }

    /// Count of distinct tokens `user` currently stakes.
    pub fn unique_tokens_staked(env: Env, user: Address) -> u32 {
        storage::get_unique_count(&env, &user)
    }

    /// The staker at `index` in first-stake order; index 0 is the first
    /// account that ever staked.
    pub fn staker(env: Env, index: u32) -> Address {
        match storage::stakers(&env).get(index) {
            Some(staker) => staker,
            None => panic_with_error!(&env, Error::IndexOutOfBounds),
        }
    }

    /// The full roster of everyone who has ever staked, first-stake order.
    pub fn stakers(env: Env) -> Vec<Address> {
        storage::stakers(&env)
    }

    /// Number of accounts that have ever staked.
    pub fn staker_count(env: Env) -> u32 {
        storage::stakers(&env).len()
    }

    /// Return `true` if `user` has ever staked.
    pub fn is_staker(env: Env, user: Address) -> bool {
        storage::is_staker(&env, &user)
    }

    /// The feed registered for `token`, or `None`.
    pub fn price_feed(env: Env, token: Address) -> Option<Address> {
        storage::get_price_feed(&env, &token)
    }

    /// The owner fixed at `init`.
    pub fn owner(env: Env) -> Address {
        access::get_owner(&env)
    }

    /// The reward token fixed at `init`.
    pub fn reward_token(env: Env) -> Address {
        match storage::get_reward_token(&env) {
            Some(token) => token,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────

    /// Cross-contract call into a feed. Any contract answering
    /// `latest_round_data() -> PriceData` qualifies.
    fn fetch_price(env: &Env, feed: &Address) -> PriceData {
        env.invoke_contract(
            feed,
            &Symbol::new(env, "latest_round_data"),
            Vec::<Val>::new(env),
        )
    }

    fn single_token_value(env: &Env, user: &Address, token: &Address) -> i128 {
        let balance = storage::get_stake_balance(env, token, user);
        if balance == 0 {
            return 0;
        }

        let feed = match storage::get_price_feed(env, token) {
            Some(feed) => feed,
            None => panic_with_error!(env, Error::PriceFeedNotSet),
        };
        let data = Self::fetch_price(env, &feed);

        let scale = match 10i128.checked_pow(data.decimals) {
            Some(scale) => scale,
            None => panic_with_error!(env, Error::Overflow),
        };
        match balance.checked_mul(data.price) {
            Some(scaled) => scaled / scale,
            None => panic_with_error!(env, Error::Overflow),
        }
    }

    fn total_value(env: &Env, user: &Address) -> i128 {
        if storage::get_unique_count(env, user) == 0 {
            return 0;
        }
        let mut total: i128 = 0;
        for token in storage::allowed_tokens(env).iter() {
            let value = Self::single_token_value(env, user, &token);
            total = match total.checked_add(value) {
                Some(total) => total,
                None => panic_with_error!(env, Error::Overflow),
            };
        }
        total
    }
}
