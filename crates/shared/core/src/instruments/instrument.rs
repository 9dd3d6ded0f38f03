use serde::{Deserialize, Serialize};

use crate::values::Symbol;

/// Identifier for a tradable instrument
///
/// An instrument either has no underlying (it *is* an underlying, e.g. an
/// equity) or exactly one underlying (it is a derivative contract written on
/// that underlying, e.g. an option). The relation is a plain optional link
/// rather than a type hierarchy: the query layer only ever asks "does this
/// have an underlying, and which one?".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentId {
    /// Display/ticker string (e.g. "SPY", "SPY 240119C00470000")
    pub value: Symbol,
    /// Underlying instrument, present iff this is a derivative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying: Option<Box<InstrumentId>>,
}

impl InstrumentId {
    /// Create an identifier for an underlying (non-derivative) instrument
    pub fn new(value: impl Into<Symbol>) -> Self {
        Self {
            value: value.into(),
            underlying: None,
        }
    }

    /// Create an identifier for a derivative written on `underlying`
    pub fn derivative(value: impl Into<Symbol>, underlying: InstrumentId) -> Self {
        Self {
            value: value.into(),
            underlying: Some(Box::new(underlying)),
        }
    }

    /// Get the ticker as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True if this instrument is a derivative contract
    pub fn has_underlying(&self) -> bool {
        self.underlying.is_some()
    }

    /// The underlying instrument, if this is a derivative
    pub fn underlying(&self) -> Option<&InstrumentId> {
        self.underlying.as_deref()
    }

    /// Symbol that exposure is aggregated under.
    ///
    /// A derivative resolves to its underlying's ticker, anything else to its
    /// own, so callers may pass either the underlying or any of its contracts.
    pub fn target_symbol(&self) -> &str {
        match self.underlying() {
            Some(underlying) => underlying.as_str(),
            None => self.as_str(),
        }
    }

    /// True if this is a derivative whose underlying's ticker is `symbol`
    pub fn is_derivative_of(&self, symbol: &str) -> bool {
        self.underlying()
            .is_some_and(|underlying| underlying.as_str() == symbol)
    }
}

impl std::fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
