use soroban_sdk::{Address, Env, Symbol, Val, Vec};

use crate::forwarder::{self, Operation};
use crate::quote::{ClearQuote, SetQuote};
use crate::storage_types::MetaTxEnvelope;
use crate::Error;

pub type Handler = fn(&Env, Address, Val, Option<MetaTxEnvelope>) -> Result<Address, Error>;

/// Every operation reachable through the by-name `forward` entry.
const OPERATIONS: [(Symbol, Handler); 2] = [
    (SetQuote::NAME, forwarder::forward_packed::<SetQuote>),
    (ClearQuote::NAME, forwarder::forward_packed::<ClearQuote>),
];

pub fn lookup(name: &Symbol) -> Option<Handler> {
    OPERATIONS
        .iter()
        .find(|(registered, _)| registered == name)
        .map(|(_, handler)| *handler)
}

pub fn names(env: &Env) -> Vec<Symbol> {
    let mut names = Vec::new(env);
    for (name, _) in OPERATIONS.iter() {
        names.push_back(name.clone());
    }
    names
}
