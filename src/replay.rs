//! Per-identity replay counters.
//!
//! Each identity has one strictly increasing `u64` slot. Gaps are allowed,
//! so a signer may skip counter values, but a value at or below the last
//! accepted one is never accepted again.

use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, COUNTER_BUMP_AMOUNT, COUNTER_LIFETIME_THRESHOLD};
use crate::Error;

/// Last accepted counter for `identity`, `0` if it never relayed.
pub fn last_seen(env: &Env, identity: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Counter(identity.clone()))
        .unwrap_or(0)
}

/// Record `counter` for `identity` if it is above the last accepted value.
///
/// The write is only durable if the enclosing invocation succeeds; an error
/// returned later in the same call rolls it back.
pub fn check_and_advance(env: &Env, identity: &Address, counter: u64) -> Result<(), Error> {
    if counter <= last_seen(env, identity) {
        return Err(Error::CounterMismatch);
    }

    let key = DataKey::Counter(identity.clone());
    env.storage().persistent().set(&key, &counter);
    env.storage()
        .persistent()
        .extend_ttl(&key, COUNTER_LIFETIME_THRESHOLD, COUNTER_BUMP_AMOUNT);
    Ok(())
}
