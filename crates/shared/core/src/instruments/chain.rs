use serde::{Deserialize, Serialize};

use super::{InstrumentId, OptionContract, OptionRight};

/// Key a chain is published under (e.g. "?SPY" for the SPY equity options)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainKey {
    /// Canonical chain symbol
    pub symbol: String,
    /// Underlying instrument the chain is written on
    pub underlying: InstrumentId,
}

impl ChainKey {
    pub fn new(symbol: impl Into<String>, underlying: InstrumentId) -> Self {
        Self {
            symbol: symbol.into(),
            underlying,
        }
    }

    /// Key using the conventional `?<underlying>` canonical symbol
    pub fn canonical(underlying: InstrumentId) -> Self {
        Self::new(format!("?{}", underlying.as_str()), underlying)
    }
}

impl std::fmt::Display for ChainKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// All contracts quoted for one underlying at one instant
///
/// Contracts keep the order the feed supplied them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionChain {
    contracts: Vec<OptionContract>,
}

impl OptionChain {
    pub fn new(contracts: Vec<OptionContract>) -> Self {
        Self { contracts }
    }

    /// Append a contract at the end of the chain
    pub fn push(&mut self, contract: OptionContract) {
        self.contracts.push(contract);
    }

    pub fn contracts(&self) -> &[OptionContract] {
        &self.contracts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionContract> {
        self.contracts.iter()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Contracts of one right, in chain order
    pub fn by_right(&self, right: OptionRight) -> impl Iterator<Item = &OptionContract> {
        self.contracts.iter().filter(move |c| c.right == right)
    }

    pub fn calls(&self) -> impl Iterator<Item = &OptionContract> {
        self.by_right(OptionRight::Call)
    }

    pub fn puts(&self) -> impl Iterator<Item = &OptionContract> {
        self.by_right(OptionRight::Put)
    }
}

impl FromIterator<OptionContract> for OptionChain {
    fn from_iter<I: IntoIterator<Item = OptionContract>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionChain {
    type Item = &'a OptionContract;
    type IntoIter = std::slice::Iter<'a, OptionContract>;

    fn into_iter(self) -> Self::IntoIter {
        self.contracts.iter()
    }
}
