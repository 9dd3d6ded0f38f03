//! Chainbook Ports
//!
//! Port definitions (traits) for the host collaborators the query layer
//! reads from. These define the boundaries between the queries and
//! whatever owns the market data, the portfolio ledger and the order book.
//!
//! Plain in-memory collections implement every port, so tests and simple
//! hosts can hand over a `Vec` or `HashMap` directly.

mod market_data;
mod orders;
mod portfolio;

pub use market_data::MarketDataSource;
pub use orders::OpenOrderSource;
pub use portfolio::PortfolioLedger;
