//! Instrument definitions
//!
//! - `InstrumentId`: ticker plus optional underlying link
//! - `OptionContract`: a single quoted option (SPY 240119C00470000)
//! - `OptionChain`: every contract quoted for one underlying
//! - `ChainKey`: the key a chain is published under

mod chain;
mod instrument;
mod option;

pub use chain::{ChainKey, OptionChain};
pub use instrument::InstrumentId;
pub use option::{OptionContract, OptionQuote, OptionRight, OptionStyle};
