extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events},
    token, vec, Address, Env, symbol_short, IntoVal, TryIntoVal,
};

use crate::events::{PriceFeedSet, RewardIssued, TokenAdded, TokensStaked, TokensUnstaked};
use crate::testutils::{MockPriceFeed, MockPriceFeedClient};
use crate::{TokenFarm, TokenFarmClient};

const ONE: i128 = 1_000_000_000_000_000_000;
const PRICE: i128 = 2_000 * ONE;

fn setup_with_init() -> (Env, TokenFarmClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(TokenFarm, ());
    let client = TokenFarmClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let reward = env.register_stellar_asset_contract_v2(owner.clone());
    client.init(&owner, &reward.address());
    (env, client, owner, reward.address())
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn register_feed(env: &Env) -> Address {
    let feed = env.register(MockPriceFeed, ());
    MockPriceFeedClient::new(env, &feed).init(&PRICE, &18);
    feed
}

#[test]
fn test_token_added_event() {
    let (env, client, owner, _) = setup_with_init();
    let tok = create_token(&env, &owner);

    client.add_allowed_token(&owner, &tok.address);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("tok_add"), token)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("tok_add").into_val(&env),
        tok.address.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TokenAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokenAdded {
            token: tok.address.clone(),
        }
    );
}

#[test]
fn test_price_feed_set_event() {
    let (env, client, owner, _) = setup_with_init();
    let tok = create_token(&env, &owner);
    let feed = register_feed(&env);

    client.set_price_feed(&owner, &tok.address, &feed);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("feed_set"), token)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("feed_set").into_val(&env),
        tok.address.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: PriceFeedSet = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        PriceFeedSet {
            token: tok.address.clone(),
            feed: feed.clone(),
        }
    );
}

#[test]
fn test_tokens_staked_event() {
    let (env, client, owner, _) = setup_with_init();
    let tok = create_token(&env, &owner);
    client.add_allowed_token(&owner, &tok.address);

    let staker = Address::generate(&env);
    token::StellarAssetClient::new(&env, &tok.address).mint(&staker, &ONE);

    client.stake_tokens(&staker, &tok.address, &ONE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("staked"), staker)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("staked").into_val(&env),
        staker.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TokensStaked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokensStaked {
            staker: staker.clone(),
            token: tok.address.clone(),
            amount: ONE,
        }
    );
}

#[test]
fn test_tokens_unstaked_event() {
    let (env, client, owner, _) = setup_with_init();
    let tok = create_token(&env, &owner);
    client.add_allowed_token(&owner, &tok.address);

    let staker = Address::generate(&env);
    token::StellarAssetClient::new(&env, &tok.address).mint(&staker, &ONE);
    client.stake_tokens(&staker, &tok.address, &ONE);

    client.unstake_tokens(&staker, &tok.address);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("unstaked"), staker)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("unstaked").into_val(&env),
        staker.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TokensUnstaked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        TokensUnstaked {
            staker: staker.clone(),
            token: tok.address.clone(),
            amount: ONE,
        }
    );
}

#[test]
fn test_reward_issued_event() {
    let (env, client, owner, reward) = setup_with_init();
    let tok = create_token(&env, &owner);
    client.add_allowed_token(&owner, &tok.address);
    let feed = register_feed(&env);
    client.set_price_feed(&owner, &tok.address, &feed);

    let staker = Address::generate(&env);
    token::StellarAssetClient::new(&env, &tok.address).mint(&staker, &ONE);
    client.stake_tokens(&staker, &tok.address, &ONE);
    token::StellarAssetClient::new(&env, &reward).mint(&client.address, &(10_000 * ONE));

    client.issue_tokens(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("reward"), staker)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("reward").into_val(&env),
        staker.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RewardIssued = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RewardIssued {
            staker: staker.clone(),
            amount: PRICE,
        }
    );
}
