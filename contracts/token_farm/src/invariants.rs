
#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

/// INV-1: After a stake of `amount`, the staked balance increases by exactly
/// `amount`.
pub fn assert_stake_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-1 violated: stake invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// INV-2: Unstaking returns exactly the prior balance and leaves zero staked.
pub fn assert_unstake_invariant(prior_balance: i128, withdrawn: i128, post_balance: i128) {
    assert_eq!(
        withdrawn, prior_balance,
        "INV-2 violated: unstake returned {} but {} was staked",
        withdrawn, prior_balance
    );
    assert_eq!(
        post_balance, 0,
        "INV-2 violated: balance is {} after full unstake",
        post_balance
    );
}

/// INV-3: The roster holds each staker exactly once.
pub fn assert_roster_unique(roster: &Vec<Address>) {
    for i in 0..roster.len() {
        let a = roster.get(i).unwrap();
        for j in (i + 1)..roster.len() {
            assert_ne!(
                a,
                roster.get(j).unwrap(),
                "INV-3 violated: roster entry at {} repeated at {}",
                i,
                j
            );
        }
    }
}

/// INV-4: A user's distinct-token count never exceeds the registry size.
pub fn assert_unique_count_bounded(unique_count: u32, allowed_count: u32) {
    assert!(
        unique_count <= allowed_count,
        "INV-4 violated: {} distinct tokens staked with only {} allowed",
        unique_count,
        allowed_count
    );
}

/// INV-5: Single-token valuation is `balance * price / 10^decimals` with
/// truncating division.
pub fn assert_valuation_formula(balance: i128, price: i128, decimals: u32, actual: i128) {
    let expected = balance * price / 10i128.pow(decimals);
    assert_eq!(
        actual, expected,
        "INV-5 violated: value of {} at price {} ({} decimals) is {}, expected {}",
        balance, price, decimals, actual, expected
    );
}

/// INV-6: Total value is the sum of the per-token values.
pub fn assert_total_is_sum(per_token: &[i128], total: i128) {
    let expected: i128 = per_token.iter().sum();
    assert_eq!(
        total, expected,
        "INV-6 violated: total value {} != sum of parts {}",
        total, expected
    );
}
