use crate::Error;

/// Effective expiry of an envelope: the client value verbatim, otherwise
/// `now + default_expiry`.
pub fn resolve(client_expiry: Option<u64>, now: u64, default_expiry: u64) -> u64 {
    match client_expiry {
        Some(expiry) => expiry,
        None => now.saturating_add(default_expiry),
    }
}

/// Accepts `now <= expiry <= now + max_expiry`.
///
/// Runs on the default path too, since `max_expiry` may have been lowered
/// below the configured default after it was set.
pub fn enforce(expiry: u64, now: u64, max_expiry: u64) -> Result<(), Error> {
    if now > expiry {
        return Err(Error::Expired);
    }
    if expiry > now.saturating_add(max_expiry) {
        return Err(Error::ExpiryBoundExceeded);
    }
    Ok(())
}
