//! Chainbook Core Domain
//!
//! Plain value records describing what a strategy host hands to the query
//! layer on every tick: instruments and their underlyings, option chains,
//! portfolio holdings and open orders.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod market;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Holding, OpenOrder, OrderId, OrderStatus, OrderType, Side};
pub use instruments::{
    ChainKey, InstrumentId, OptionChain, OptionContract, OptionQuote, OptionRight, OptionStyle,
};
pub use market::{OptionChains, Slice};
pub use values::{ExpiryDate, Price, Quantity, Symbol, Timestamp};
