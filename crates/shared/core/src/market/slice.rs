use serde::{Deserialize, Serialize};

use crate::instruments::{ChainKey, OptionChain};
use crate::values::Timestamp;

/// Option chains present in a slice, in the order the feed inserted them
///
/// At most one chain per underlying is expected; duplicates are kept as
/// supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionChains {
    entries: Vec<(ChainKey, OptionChain)>,
}

impl OptionChains {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chain under `key`
    pub fn insert(&mut self, key: ChainKey, chain: OptionChain) {
        self.entries.push((key, chain));
    }

    /// Builder-style `insert`
    pub fn with_chain(mut self, key: ChainKey, chain: OptionChain) -> Self {
        self.insert(key, chain);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChainKey, &OptionChain)> {
        self.entries.iter().map(|(key, chain)| (key, chain))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ChainKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ChainKey, OptionChain)> for OptionChains {
    fn from_iter<I: IntoIterator<Item = (ChainKey, OptionChain)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Market data for one evaluation tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Simulated or live time of the tick
    pub time: Timestamp,
    /// Option chains this tick; `None` when the feed had no option data
    #[serde(default)]
    pub option_chains: Option<OptionChains>,
}

impl Slice {
    /// Slice without option data
    pub fn new(time: Timestamp) -> Self {
        Self {
            time,
            option_chains: None,
        }
    }

    pub fn with_option_chains(mut self, chains: OptionChains) -> Self {
        self.option_chains = Some(chains);
        self
    }

    pub fn option_chains(&self) -> Option<&OptionChains> {
        self.option_chains.as_ref()
    }
}
