//! # Test utilities
//!
//! [`MockPriceFeed`] is a minimal feed contract for exercising the farm's
//! valuation path. It stores a single [`PriceData`] and answers
//! `latest_round_data` with it, which is the only method the farm invokes on
//! a registered feed. Compiled only for tests or under the `testutils`
//! feature; production deployments register a real oracle instead.

use soroban_sdk::{contract, contractimpl, contracttype, Env};

use crate::types::PriceData;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedKey {
    Latest,
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Fix the feed's answer to `price` scaled by `10^decimals`.
    pub fn init(env: Env, price: i128, decimals: u32) {
        env.storage()
            .instance()
            .set(&FeedKey::Latest, &PriceData { price, decimals });
    }

    /// Replace the price, keeping the decimals from `init`.
    pub fn set_price(env: Env, price: i128) {
        let mut data: PriceData = env
            .storage()
            .instance()
            .get(&FeedKey::Latest)
            .unwrap_or(PriceData { price: 0, decimals: 0 });
        data.price = price;
        env.storage().instance().set(&FeedKey::Latest, &data);
    }

    /// The answer the farm consumes during valuation.
    pub fn latest_round_data(env: Env) -> PriceData {
        env.storage()
            .instance()
            .get(&FeedKey::Latest)
            .unwrap_or(PriceData { price: 0, decimals: 0 })
    }
}
