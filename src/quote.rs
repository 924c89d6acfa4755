//! Quote board: the business module wrapped by the forwarder.
//!
//! Its operations only ever see the effective caller they are given, so they
//! behave the same whether a user calls directly or a relayer forwards a
//! signed envelope for them.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::forwarder::Operation;
use crate::storage_types::{DataKey, QuoteRecord};
use crate::Error;

pub fn get(env: &Env) -> Option<QuoteRecord> {
    env.storage().instance().get(&DataKey::Quote)
}

/// Replace the quote; the caller becomes its updater.
pub struct SetQuote;

impl Operation for SetQuote {
    const NAME: Symbol = symbol_short!("set_quote");
    type Args = (String,);

    fn invoke(env: &Env, caller: &Address, (quote,): (String,)) -> Result<(), Error> {
        if let Some(current) = get(env) {
            if current.quote == quote {
                return Err(Error::QuoteUnchanged);
            }
        }

        let record = QuoteRecord {
            quote,
            updater: caller.clone(),
            updated_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&DataKey::Quote, &record);
        env.events()
            .publish((symbol_short!("quote"), caller.clone()), record.quote);
        Ok(())
    }
}

/// Remove the quote. Only its last updater may do so.
pub struct ClearQuote;

impl Operation for ClearQuote {
    const NAME: Symbol = symbol_short!("clr_quote");
    type Args = ();

    fn invoke(env: &Env, caller: &Address, _args: ()) -> Result<(), Error> {
        let current = get(env).ok_or(Error::NoQuote)?;
        if current.updater != *caller {
            return Err(Error::NotQuoteUpdater);
        }

        env.storage().instance().remove(&DataKey::Quote);
        env.events().publish((symbol_short!("clear"), caller.clone()), ());
        Ok(())
    }
}
