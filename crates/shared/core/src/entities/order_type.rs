use serde::{Deserialize, Serialize};

/// Order types a host may have working
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at current market price
    Market,
    /// Execute at specified price or better
    Limit,
    /// Market order triggered when price reaches stop price
    StopMarket,
    /// Limit order triggered when price reaches stop price
    StopLimit,
    /// Market order queued for the next open
    MarketOnOpen,
}
