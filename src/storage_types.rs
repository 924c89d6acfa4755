use soroban_sdk::{contracttype, Address, BytesN, String};

/// Default validity window for envelopes that carry no expiry (1 hour).
pub const DEFAULT_EXPIRY: u64 = 3600;
/// Upper bound on how far in the future an envelope may expire (1 day).
pub const MAX_EXPIRY: u64 = 86400;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const COUNTER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const COUNTER_LIFETIME_THRESHOLD: u32 = COUNTER_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Owner-gated bounds consumed by the expiry policy.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub default_expiry: u64,
    pub max_expiry: u64,
}

/// Authorization payload a relayer attaches to a wrapped call.
///
/// `expiry` is signed exactly as supplied: an absent expiry is part of the
/// signed message and resolves to `now + default_expiry` at call time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetaTxEnvelope {
    pub public_key: BytesN<32>,
    pub signature: BytesN<64>,
    pub counter: u64,
    pub expiry: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoteRecord {
    pub quote: String,
    pub updater: Address,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Counter(Address),
    Quote,
}
