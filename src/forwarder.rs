//! Forwarding of wrapped operations with a substituted caller identity.
//!
//! Every wrapped call carries the native `caller` plus an optional
//! [`MetaTxEnvelope`]. Without an envelope the call is `Direct` and runs as
//! `caller`. With one, the envelope is checked in a fixed order (expiry,
//! encoding, signature, replay counter) and the call runs as the identity
//! derived from the signer's public key. The identity is handed to the
//! operation as an argument and nothing outlives the call.

use soroban_sdk::{log, symbol_short, Address, Env, IntoVal, Symbol, TryFromVal, Val};

use crate::storage_types::MetaTxEnvelope;
use crate::{config, encoder, expiry, replay, verifier, Error};

/// A business operation that can be invoked through the forwarder.
pub trait Operation {
    /// Registry name, also published in the `fwd` event.
    const NAME: Symbol;

    /// Original arguments, packed as a tuple. The XDR of the packed value is
    /// what `param_hash` commits to.
    type Args: IntoVal<Env, Val> + TryFromVal<Env, Val>;

    fn invoke(env: &Env, caller: &Address, args: Self::Args) -> Result<(), Error>;
}

/// Who the forwarded operation runs as.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sender {
    Direct(Address),
    Authorized { identity: Address, counter: u64 },
}

impl Sender {
    pub fn identity(&self) -> &Address {
        match self {
            Sender::Direct(caller) => caller,
            Sender::Authorized { identity, .. } => identity,
        }
    }
}

/// Forward typed arguments to `O`, returning the identity it ran as.
pub fn forward<O: Operation>(
    env: &Env,
    caller: Address,
    args: O::Args,
    meta_tx: Option<MetaTxEnvelope>,
) -> Result<Address, Error> {
    let packed: Val = args.into_val(env);
    run::<O>(env, caller, args, packed, meta_tx)
}

/// Forward arguments that arrive already packed, as on the by-name entry.
pub fn forward_packed<O: Operation>(
    env: &Env,
    caller: Address,
    packed: Val,
    meta_tx: Option<MetaTxEnvelope>,
) -> Result<Address, Error> {
    let args = O::Args::try_from_val(env, &packed).map_err(|_| Error::InvalidArguments)?;
    run::<O>(env, caller, args, packed, meta_tx)
}

fn run<O: Operation>(
    env: &Env,
    caller: Address,
    args: O::Args,
    packed: Val,
    meta_tx: Option<MetaTxEnvelope>,
) -> Result<Address, Error> {
    caller.require_auth();

    let sender = match meta_tx {
        None => Sender::Direct(caller.clone()),
        Some(envelope) => authorize(env, packed, &envelope)?,
    };

    O::invoke(env, sender.identity(), args)?;

    match sender {
        Sender::Direct(identity) => Ok(identity),
        Sender::Authorized { identity, counter } => {
            env.events().publish(
                (symbol_short!("fwd"), identity.clone(), caller),
                (O::NAME, counter),
            );
            Ok(identity)
        }
    }
}

/// Validate an envelope against the packed arguments it claims to sign.
///
/// The counter is advanced last, after every read-only check has passed.
fn authorize(env: &Env, packed: Val, envelope: &MetaTxEnvelope) -> Result<Sender, Error> {
    let config = config::load(env)?;
    let now = env.ledger().timestamp();

    let effective = expiry::resolve(envelope.expiry, now, config.default_expiry);
    expiry::enforce(effective, now, config.max_expiry)?;

    let message = encoder::encode(
        env,
        &env.ledger().network_id(),
        &env.current_contract_address(),
        envelope.counter,
        envelope.expiry,
        &encoder::param_hash(env, packed),
    );
    if !verifier::verify(&envelope.public_key, &envelope.signature, &message) {
        log!(env, "meta-tx signature rejected", envelope.counter);
        return Err(Error::SignatureInvalid);
    }

    let identity = verifier::derive_identity(env, &envelope.public_key);
    replay::check_and_advance(env, &identity, envelope.counter)?;

    Ok(Sender::Authorized {
        identity,
        counter: envelope.counter,
    })
}
