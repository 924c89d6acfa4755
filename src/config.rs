use soroban_sdk::{symbol_short, Address, Env};

use crate::storage_types::{
    Config, DataKey, DEFAULT_EXPIRY, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, MAX_EXPIRY,
};
use crate::Error;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn store(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn initialize(
    env: &Env,
    owner: Address,
    default_expiry: Option<u64>,
    max_expiry: Option<u64>,
) -> Result<Config, Error> {
    if is_initialized(env) {
        return Err(Error::AlreadyInitialized);
    }

    let config = Config {
        owner,
        default_expiry: default_expiry.unwrap_or(DEFAULT_EXPIRY),
        max_expiry: max_expiry.unwrap_or(MAX_EXPIRY),
    };
    if config.default_expiry > config.max_expiry {
        return Err(Error::ExpiryBoundExceeded);
    }

    store(env, &config);
    env.events().publish(
        (symbol_short!("init"),),
        (config.owner.clone(), config.default_expiry, config.max_expiry),
    );
    Ok(config)
}

/// Authenticate `caller` and load the config it is allowed to mutate.
fn require_owner(env: &Env, caller: &Address) -> Result<Config, Error> {
    caller.require_auth();
    let config = load(env)?;
    if *caller != config.owner {
        return Err(Error::NotOwner);
    }
    Ok(config)
}

pub fn change_owner(env: &Env, caller: &Address, new_owner: Address) -> Result<(), Error> {
    let mut config = require_owner(env, caller)?;
    config.owner = new_owner;
    store(env, &config);
    env.events()
        .publish((symbol_short!("owner"), caller.clone()), config.owner);
    Ok(())
}

pub fn set_default_expiry(env: &Env, caller: &Address, value: u64) -> Result<(), Error> {
    let mut config = require_owner(env, caller)?;
    if value > config.max_expiry {
        return Err(Error::ExpiryBoundExceeded);
    }
    config.default_expiry = value;
    store(env, &config);
    env.events().publish((symbol_short!("def_exp"),), value);
    Ok(())
}

/// Not checked against the current default: a default above the new bound
/// is left in place and rejected when an envelope relies on it.
pub fn set_max_expiry(env: &Env, caller: &Address, value: u64) -> Result<(), Error> {
    let mut config = require_owner(env, caller)?;
    config.max_expiry = value;
    store(env, &config);
    env.events().publish((symbol_short!("max_exp"),), value);
    Ok(())
}
