use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{OrderStatus, OrderType, Side};
use crate::instruments::InstrumentId;
use crate::values::{Price, Quantity};

/// Unique identifier for an order
pub type OrderId = Uuid;

/// A submitted order that has not been completely filled or cancelled
///
/// Quantities are signed: positive = buy (long intent), negative = sell
/// (short intent). `filled_quantity` carries the same sign as `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub id: OrderId,
    /// The instrument being traded
    pub instrument: InstrumentId,
    /// Signed order quantity
    pub quantity: Quantity,
    /// Signed quantity filled so far
    #[serde(default)]
    pub filled_quantity: Quantity,
    pub order_type: OrderType,
    /// Required for Limit orders
    #[serde(default)]
    pub limit_price: Option<Price>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OpenOrder {
    /// Create a new order with explicit timestamp
    pub fn new_with_time(
        instrument: InstrumentId,
        quantity: Quantity,
        order_type: OrderType,
        limit_price: Option<Price>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument,
            quantity,
            filled_quantity: Decimal::ZERO,
            order_type,
            limit_price,
            status: OrderStatus::Submitted,
            created_at: timestamp,
        }
    }

    /// Market order using current system time
    /// Note: For simulation, prefer `new_with_time` with the tick's time
    pub fn market(instrument: InstrumentId, quantity: Quantity) -> Self {
        Self::new_with_time(instrument, quantity, OrderType::Market, None, Utc::now())
    }

    /// Limit order using current system time
    pub fn limit(instrument: InstrumentId, quantity: Quantity, price: Price) -> Self {
        Self::new_with_time(
            instrument,
            quantity,
            OrderType::Limit,
            Some(price),
            Utc::now(),
        )
    }

    /// Record a (partial) fill of `quantity` units, signed like the order
    pub fn with_filled(mut self, quantity: Quantity) -> Self {
        self.filled_quantity = quantity;
        self.status = if self.remaining_quantity().is_zero() {
            OrderStatus::Filled
        } else if quantity.is_zero() {
            self.status
        } else {
            OrderStatus::PartiallyFilled
        };
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Direction implied by the sign of the quantity
    pub fn side(&self) -> Side {
        if self.quantity < Decimal::ZERO {
            Side::Sell
        } else {
            Side::Buy
        }
    }

    pub fn absolute_quantity(&self) -> Quantity {
        self.quantity.abs()
    }

    /// Signed quantity still waiting to be filled
    pub fn remaining_quantity(&self) -> Quantity {
        self.quantity - self.filled_quantity
    }

    /// True while the order can still be filled
    pub fn is_open(&self) -> bool {
        self.status.is_active()
    }
}
