//! Desk configuration
//!
//! Controls how the `OptionsDesk` accessor reads the host's order book.
//! The free query functions always use the defaults.

use std::path::Path;

use chainbook_core::{OpenOrder, OrderStatus, Quantity};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which quantity of a working order counts towards exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderQuantityBasis {
    /// Full signed order quantity, regardless of partial fills (default)
    #[default]
    Ordered,
    /// Signed quantity still unfilled
    Remaining,
}

impl OrderQuantityBasis {
    /// Signed quantity of `order` under this basis
    pub fn signed_quantity(&self, order: &OpenOrder) -> Quantity {
        match self {
            OrderQuantityBasis::Ordered => order.quantity,
            OrderQuantityBasis::Remaining => order.remaining_quantity(),
        }
    }
}

/// Configuration for `OptionsDesk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Quantity basis for working orders
    pub order_quantity: OrderQuantityBasis,
    /// Statuses an order must have to count as open
    pub open_statuses: Vec<OrderStatus>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            order_quantity: OrderQuantityBasis::Ordered,
            open_statuses: OrderStatus::ALL
                .into_iter()
                .filter(OrderStatus::is_active)
                .collect(),
        }
    }
}

impl DeskConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_order_quantity(mut self, basis: OrderQuantityBasis) -> Self {
        self.order_quantity = basis;
        self
    }

    pub fn with_open_statuses(mut self, statuses: Vec<OrderStatus>) -> Self {
        self.open_statuses = statuses;
        self
    }

    /// True if an order in `status` should be treated as working
    pub fn counts_as_open(&self, status: OrderStatus) -> bool {
        self.open_statuses.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainbook_core::InstrumentId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = DeskConfig::default();

        assert_eq!(config.order_quantity, OrderQuantityBasis::Ordered);
        assert!(config.counts_as_open(OrderStatus::Submitted));
        assert!(config.counts_as_open(OrderStatus::PartiallyFilled));
        assert!(!config.counts_as_open(OrderStatus::Filled));
        assert!(!config.counts_as_open(OrderStatus::Canceled));
    }

    #[test]
    fn test_default_open_set_follows_order_lifecycle() {
        let config = DeskConfig::default();

        for status in OrderStatus::ALL {
            assert_eq!(config.counts_as_open(status), status.is_active(), "{:?}", status);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DeskConfig::from_json_str(r#"{ "order_quantity": "remaining" }"#).unwrap();

        assert_eq!(config.order_quantity, OrderQuantityBasis::Remaining);
        assert_eq!(config.open_statuses, DeskConfig::default().open_statuses);
    }

    #[test]
    fn test_open_statuses_from_json() {
        let config = DeskConfig::from_json_str(r#"{ "open_statuses": ["Submitted"] }"#).unwrap();

        assert!(config.counts_as_open(OrderStatus::Submitted));
        assert!(!config.counts_as_open(OrderStatus::New));
    }

    #[test]
    fn test_invalid_json() {
        let err = DeskConfig::from_json_str(r#"{ "order_quantity": "half" }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DeskConfig::from_path("/nonexistent/chainbook/desk.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/chainbook/desk.json"));
    }

    #[test]
    fn test_quantity_basis() {
        let call = InstrumentId::derivative("SPY 240119C00470000", InstrumentId::new("SPY"));
        let order = OpenOrder::market(call, dec!(-10)).with_filled(dec!(-4));

        assert_eq!(OrderQuantityBasis::Ordered.signed_quantity(&order), dec!(-10));
        assert_eq!(OrderQuantityBasis::Remaining.signed_quantity(&order), dec!(-6));
    }
}
