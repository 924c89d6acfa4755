use ed25519_dalek::{Signature, VerifyingKey};
use soroban_sdk::{Address, Bytes, BytesN, Env};

/// Largest encoded message accepted for verification. Canonical messages are
/// a few hundred bytes; anything longer cannot have been produced by
/// [`crate::encoder::encode`].
pub const MAX_MESSAGE_LEN: usize = 512;

const ACCOUNT_ID_VERSION: u8 = 6 << 3;
const PAYLOAD_LEN: usize = 35;
const STRKEY_LEN: usize = 56;
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Derive the Stellar account address (`G...`) controlled by `public_key`.
pub fn derive_identity(env: &Env, public_key: &BytesN<32>) -> Address {
    let strkey = account_strkey(&public_key.to_array());
    Address::from_string_bytes(&Bytes::from_slice(env, &strkey))
}

/// Strict ed25519 verification of `signature` over `message`.
///
/// Returns `false` for malformed keys, non-canonical signatures and any
/// mismatch. Only public values are compared.
pub fn verify(public_key: &BytesN<32>, signature: &BytesN<64>, message: &Bytes) -> bool {
    let len = message.len() as usize;
    if len > MAX_MESSAGE_LEN {
        return false;
    }
    let mut buf = [0u8; MAX_MESSAGE_LEN];
    message.copy_into_slice(&mut buf[..len]);

    let key = match VerifyingKey::from_bytes(&public_key.to_array()) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let signature = Signature::from_bytes(&signature.to_array());
    key.verify_strict(&buf[..len], &signature).is_ok()
}

fn account_strkey(public_key: &[u8; 32]) -> [u8; STRKEY_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = ACCOUNT_ID_VERSION;
    payload[1..33].copy_from_slice(public_key);
    let checksum = crc16_xmodem(&payload[..33]);
    payload[33..].copy_from_slice(&checksum.to_le_bytes());

    // 35 bytes is exactly seven 40-bit groups, so no padding is needed.
    let mut out = [0u8; STRKEY_LEN];
    for (group, chunk) in payload.chunks(5).enumerate() {
        let mut bits: u64 = 0;
        for byte in chunk {
            bits = (bits << 8) | u64::from(*byte);
        }
        for i in 0..8 {
            let index = (bits >> (35 - 5 * i)) & 0x1f;
            out[group * 8 + i] = BASE32_ALPHABET[index as usize];
        }
    }
    out
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
