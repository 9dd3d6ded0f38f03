//! Chainbook Queries
//!
//! Answers two questions a strategy asks on every tick:
//! - **Exposure**: what is my net signed exposure to an underlying, across
//!   all its derivative contracts, counting filled holdings and working orders?
//! - **Selection**: which contracts belong to the Nth-nearest expiration in
//!   the option chain available right now?
//!
//! ## Architecture
//!
//! ```text
//!  Market data feed ──► Slice ──► Chain Locator ──► Expiration Selector
//!                                                          │
//!                                                          ▼
//!                                              contracts at distance N
//!
//!  Portfolio ledger ──► Holdings ──┐
//!                                  ├──► Exposure Aggregator ──► net exposure
//!  Order manager ───► Open orders ─┘
//! ```
//!
//! Every query is a pure, synchronous function of the snapshots passed in.
//! Nothing is cached between calls. "Not found" (no chain this tick, no
//! expiration at the requested distance) is `None`, never an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chainbook_query::{select_by_expiry_distance, net_exposure, OptionsDesk};
//!
//! // Free functions over explicit snapshots
//! let front_month = select_by_expiry_distance(Some(&slice), &spy, 0);
//! let net = net_exposure(&holdings, &orders, &spy);
//!
//! // Or bundle the host collaborators once per tick
//! let desk = OptionsDesk::new(&slice, &holdings, &orders);
//! let next_month = desk.contracts_at_expiry(&spy, 1);
//! ```

pub mod chain;
pub mod config;
pub mod desk;
pub mod error;
pub mod expiry;
pub mod exposure;

// Re-export main types
pub use chain::{check_chain_integrity, locate_chain};
pub use config::{DeskConfig, OrderQuantityBasis};
pub use desk::OptionsDesk;
pub use error::{Error, Result};
pub use expiry::{
    contracts_at_distance, distinct_expirations, expirations, nearest_strike,
    select_by_expiry_distance,
};
pub use exposure::{
    ExposureBreakdown, LegFilter, exposure_breakdown, exposure_breakdown_by, holding_quantity,
    net_exposure, open_order_quantity, open_order_quantity_by,
};
