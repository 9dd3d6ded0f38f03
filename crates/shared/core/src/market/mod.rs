//! Per-tick market data snapshot handed over by the host feed

mod slice;

pub use slice::{OptionChains, Slice};
