//! Expiration Selector
//!
//! Picks the contracts of the Nth-nearest expiration present in a chain.
//! Distance 0 is the nearest expiration the chain currently contains, which
//! is not necessarily the nearest calendar date if the feed already dropped
//! front-month contracts.

use std::collections::HashSet;

use chainbook_core::{
    ExpiryDate, InstrumentId, OptionChain, OptionContract, OptionRight, Price, Slice,
};
use log::{debug, trace};

use crate::chain::locate_chain;

/// Distinct expirations of `chain`, ascending.
///
/// Duplicates are dropped before sorting so that many contracts sharing an
/// expiry count as one step of distance.
pub fn distinct_expirations(chain: &OptionChain) -> Vec<ExpiryDate> {
    let mut seen = HashSet::new();
    let mut expirations: Vec<ExpiryDate> = chain
        .iter()
        .map(|contract| contract.expiry)
        .filter(|expiry| seen.insert(*expiry))
        .collect();
    expirations.sort();
    expirations
}

/// Distinct ascending expirations of the chain for `underlying`
pub fn expirations(slice: Option<&Slice>, underlying: &InstrumentId) -> Option<Vec<ExpiryDate>> {
    locate_chain(slice, underlying).map(distinct_expirations)
}

/// Contracts of `chain` sharing the expiration at index `distance` of the
/// distinct ascending expiration list, in chain order.
///
/// `None` if the chain has `distance` or fewer distinct expirations.
pub fn contracts_at_distance(chain: &OptionChain, distance: usize) -> Option<Vec<&OptionContract>> {
    let expirations = distinct_expirations(chain);
    let Some(&target) = expirations.get(distance) else {
        debug!(
            "No expiration at distance {} ({} available)",
            distance,
            expirations.len()
        );
        return None;
    };

    let mut contracts: Vec<&OptionContract> = chain
        .iter()
        .filter(|contract| contract.expiry == target)
        .collect();
    // Stable: contracts tied on expiry keep chain order
    contracts.sort_by_key(|contract| contract.expiry);

    trace!(
        "Selected {} contracts expiring {} at distance {}",
        contracts.len(),
        target,
        distance
    );
    Some(contracts)
}

/// Contracts of the `distance`-th nearest expiration for `underlying`.
///
/// `None` if no chain exists for the underlying this tick, or if there is no
/// expiration at that distance.
pub fn select_by_expiry_distance<'a>(
    slice: Option<&'a Slice>,
    underlying: &InstrumentId,
    distance: usize,
) -> Option<Vec<&'a OptionContract>> {
    let chain = locate_chain(slice, underlying)?;
    contracts_at_distance(chain, distance)
}

/// Contract of `right` whose strike is closest to `price`.
///
/// Ties resolve to the lower strike.
pub fn nearest_strike<'a, I>(contracts: I, right: OptionRight, price: Price) -> Option<&'a OptionContract>
where
    I: IntoIterator<Item = &'a OptionContract>,
{
    contracts
        .into_iter()
        .filter(|contract| contract.right == right)
        .min_by(|a, b| {
            (a.strike - price)
                .abs()
                .cmp(&(b.strike - price).abs())
                .then(a.strike.cmp(&b.strike))
        })
}
