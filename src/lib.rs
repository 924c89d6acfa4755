#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, Address, BytesN, Env, String, Symbol, Val, Vec,
};

mod config;
mod encoder;
mod expiry;
mod forwarder;
mod quote;
mod registry;
mod replay;
mod storage_types;
mod verifier;

use crate::quote::{ClearQuote, SetQuote};
pub use storage_types::{Config, MetaTxEnvelope, QuoteRecord, DEFAULT_EXPIRY, MAX_EXPIRY};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner = 1,
    ExpiryBoundExceeded = 2,
    Expired = 3,
    CounterMismatch = 4,
    SignatureInvalid = 5,
    AlreadyInitialized = 6,
    NotInitialized = 7,
    UnknownOperation = 8,
    InvalidArguments = 9,
    QuoteUnchanged = 10,
    NoQuote = 11,
    NotQuoteUpdater = 12,
}

#[contract]
pub struct MetaTxContract;

#[contractimpl]
impl MetaTxContract {
    /// Initialize the contract with an owner and optional expiry bounds
    /// (defaults: 3600s default, 86400s max). Only can be called once.
    pub fn initialize(
        e: Env,
        owner: Address,
        default_expiry: Option<u64>,
        max_expiry: Option<u64>,
    ) -> Result<(), Error> {
        config::initialize(&e, owner, default_expiry, max_expiry)?;
        Ok(())
    }

    /// Hand the config over to `new_owner`. Only callable by the owner.
    pub fn change_owner(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        config::change_owner(&e, &caller, new_owner)
    }

    /// Set the validity window used when an envelope carries no expiry.
    /// Must not exceed the current max expiry.
    pub fn set_default_expiry(e: Env, caller: Address, value: u64) -> Result<(), Error> {
        config::set_default_expiry(&e, &caller, value)
    }

    /// Set the furthest an envelope may expire past the current ledger time.
    pub fn set_max_expiry(e: Env, caller: Address, value: u64) -> Result<(), Error> {
        config::set_max_expiry(&e, &caller, value)
    }

    /// Store a new quote, either as `caller` or, with `meta_tx`, as the
    /// envelope signer relayed by `caller`. Returns the identity it ran as.
    ///
    /// # Arguments
    /// * `caller` - The submitting account (the user, or the relayer)
    /// * `quote` - The new quote
    /// * `meta_tx` - Signed envelope authorizing the call on a signer's behalf
    pub fn set_quote(
        e: Env,
        caller: Address,
        quote: String,
        meta_tx: Option<MetaTxEnvelope>,
    ) -> Result<Address, Error> {
        forwarder::forward::<SetQuote>(&e, caller, (quote,), meta_tx)
    }

    /// Remove the current quote. Only its last updater may clear it.
    pub fn clear_quote(
        e: Env,
        caller: Address,
        meta_tx: Option<MetaTxEnvelope>,
    ) -> Result<Address, Error> {
        forwarder::forward::<ClearQuote>(&e, caller, (), meta_tx)
    }

    /// Forward a registered operation by name with its packed arguments.
    ///
    /// # Arguments
    /// * `op` - Registered operation name (see `operations`)
    /// * `args` - The operation's arguments packed as a tuple
    pub fn forward(
        e: Env,
        caller: Address,
        op: Symbol,
        args: Val,
        meta_tx: Option<MetaTxEnvelope>,
    ) -> Result<Address, Error> {
        let handler = registry::lookup(&op).ok_or(Error::UnknownOperation)?;
        handler(&e, caller, args, meta_tx)
    }

    /// Names accepted by `forward`.
    pub fn operations(e: Env) -> Vec<Symbol> {
        registry::names(&e)
    }

    /// Last counter accepted for `identity`; the next envelope must exceed it.
    pub fn get_counter(e: Env, identity: Address) -> u64 {
        replay::last_seen(&e, &identity)
    }

    pub fn get_default_expiry(e: Env) -> Result<u64, Error> {
        Ok(config::load(&e)?.default_expiry)
    }

    pub fn get_max_expiry(e: Env) -> Result<u64, Error> {
        Ok(config::load(&e)?.max_expiry)
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        Ok(config::load(&e)?.owner)
    }

    /// The account address an envelope signed with `public_key` acts as.
    pub fn identity_of(e: Env, public_key: BytesN<32>) -> Address {
        verifier::derive_identity(&e, &public_key)
    }

    pub fn get_quote(e: Env) -> Option<QuoteRecord> {
        quote::get(&e)
    }
}
