//! Canonical encoding of the message an envelope signer signs.
//!
//! The signed message is the XDR encoding of the ordered tuple
//! `(chain_id, contract_address, counter, expiry, param_hash)`. Tuples encode
//! as an `ScVec`, so field order is fixed, and every element is a typed,
//! length-delimited XDR value. An absent expiry encodes as `Void`, which can
//! never collide with a present `U64` expiry.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Val};

pub fn encode(
    env: &Env,
    chain_id: &BytesN<32>,
    contract_address: &Address,
    counter: u64,
    expiry: Option<u64>,
    param_hash: &BytesN<32>,
) -> Bytes {
    (
        chain_id.clone(),
        contract_address.clone(),
        counter,
        expiry,
        param_hash.clone(),
    )
        .to_xdr(env)
}

/// SHA-256 over the XDR encoding of the packed operation arguments.
pub fn param_hash(env: &Env, args: Val) -> BytesN<32> {
    let packed = args.to_xdr(env);
    env.crypto().sha256(&packed).into()
}
