use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentId;
use crate::values::{Price, Quantity};

/// Current holding of one instrument in the host portfolio ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Instrument held
    pub instrument: InstrumentId,
    /// Net quantity (positive = long, negative = short, zero = flat)
    pub quantity: Quantity,
    /// Average entry price
    #[serde(default)]
    pub average_price: Price,
}

impl Holding {
    pub fn new(instrument: InstrumentId, quantity: Quantity) -> Self {
        Self {
            instrument,
            quantity,
            average_price: Decimal::ZERO,
        }
    }

    pub fn with_average_price(mut self, price: Price) -> Self {
        self.average_price = price;
        self
    }

    pub fn is_long(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    pub fn is_short(&self) -> bool {
        self.quantity < Decimal::ZERO
    }

    /// True if the holding is not flat
    pub fn is_invested(&self) -> bool {
        !self.quantity.is_zero()
    }

    pub fn absolute_quantity(&self) -> Quantity {
        self.quantity.abs()
    }
}
