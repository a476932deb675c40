use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAdded {
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceFeedSet {
    pub token: Address,
    pub feed: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensStaked {
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensUnstaked {
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardIssued {
    pub staker: Address,
    pub amount: i128,
}

pub fn emit_token_added(env: &Env, token: Address) {
    let topics = (symbol_short!("tok_add"), token.clone());
    let data = TokenAdded { token };
    env.events().publish(topics, data);
}

pub fn emit_price_feed_set(env: &Env, token: Address, feed: Address) {
    let topics = (symbol_short!("feed_set"), token.clone());
    let data = PriceFeedSet { token, feed };
    env.events().publish(topics, data);
}

pub fn emit_tokens_staked(env: &Env, staker: Address, token: Address, amount: i128) {
    let topics = (symbol_short!("staked"), staker.clone());
    let data = TokensStaked {
        staker,
        token,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_tokens_unstaked(env: &Env, staker: Address, token: Address, amount: i128) {
    let topics = (symbol_short!("unstaked"), staker.clone());
    let data = TokensUnstaked {
        staker,
        token,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_reward_issued(env: &Env, staker: Address, amount: i128) {
    let topics = (symbol_short!("reward"), staker.clone());
    let data = RewardIssued { staker, amount };
    env.events().publish(topics, data);
}
