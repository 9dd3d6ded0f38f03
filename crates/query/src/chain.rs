//! Chain Locator
//!
//! Finds the option chain for an underlying in the current slice.

use std::collections::HashSet;

use chainbook_core::{InstrumentId, OptionChain, Slice};
use log::{debug, warn};

use crate::error::{Error, Result};

/// Locate the chain whose key is written on `underlying`.
///
/// Returns `None` when there is no slice, the slice carries no option data,
/// or no chain matches. Chains are scanned in insertion order and the first
/// match wins. `underlying` is expected to be a non-derivative instrument.
pub fn locate_chain<'a>(
    slice: Option<&'a Slice>,
    underlying: &InstrumentId,
) -> Option<&'a OptionChain> {
    let Some(chains) = slice.and_then(Slice::option_chains) else {
        debug!("No option data in current slice (looking for {})", underlying);
        return None;
    };

    let chain = chains
        .iter()
        .find(|(key, _)| key.underlying == *underlying)
        .map(|(_, chain)| chain);

    if chain.is_none() {
        debug!(
            "No option chain for {} among {} chains",
            underlying,
            chains.len()
        );
    }
    chain
}

/// Check that no two chains in `slice` are keyed to the same underlying.
///
/// `locate_chain` silently returns the first of such duplicates; hosts that
/// want to catch the feed problem can call this once per tick.
pub fn check_chain_integrity(slice: &Slice) -> Result<()> {
    let Some(chains) = slice.option_chains() else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for key in chains.keys() {
        if !seen.insert(&key.underlying) {
            warn!("Duplicate option chain {} for {}", key, key.underlying);
            return Err(Error::DuplicateChain {
                underlying: key.underlying.to_string(),
            });
        }
    }
    Ok(())
}
