//! # Access — single-owner gate
//!
//! The farm uses the simplest possible privilege model: one owner address,
//! set exactly once at initialisation and immutable afterwards. Every
//! administrative entry point (`add_allowed_token`, `set_price_feed`,
//! `issue_tokens`) funnels through [`require_owner`].
//!
//! ## Storage layout
//!
//! - `AccessKey::Owner` → `Address` — the one and only owner.
//!
//! ## Event emissions
//!
//! | Event topic | Trigger                    |
//! |-------------|----------------------------|
//! | `owner_set` | Owner fixed during `init`  |
//!
//! There is no transfer-of-ownership operation: the owner recorded at `init`
//! holds the role for the lifetime of the contract.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::Error;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessKey {
    /// The one and only owner address.
    Owner,
}

/// Set the initial owner. Must be called exactly once (during contract
/// initialisation). Panics with `Error::AlreadyInitialized` if called again.
pub fn init_owner(env: &Env, owner: &Address) {
    if env.storage().instance().has(&AccessKey::Owner) {
        panic_with_error_access(env, Error::AlreadyInitialized);
    }
    env.storage().instance().set(&AccessKey::Owner, owner);
    env.events()
        .publish((symbol_short!("owner_set"), owner.clone()), ());
}

/// Read the owner address. Panics with `Error::NotInitialized` before `init`.
pub fn get_owner(env: &Env) -> Address {
    match env.storage().instance().get(&AccessKey::Owner) {
        Some(owner) => owner,
        None => panic_with_error_access(env, Error::NotInitialized),
    }
}

/// Assert that `caller` is the owner.
/// Panics with `Error::NotAuthorized` on failure.
pub fn require_owner(env: &Env, caller: &Address) {
    if get_owner(env) != *caller {
        panic_with_error_access(env, Error::NotAuthorized);
    }
}

/// Thin wrapper so we can call panic_with_error from inside access.rs
/// without importing the macro from the parent.
#[inline(always)]
fn panic_with_error_access(env: &Env, err: Error) -> ! {
    soroban_sdk::panic_with_error!(env, err)
}
