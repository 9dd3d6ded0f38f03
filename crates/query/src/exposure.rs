//! Exposure Aggregator
//!
//! Nets signed quantity across every derivative contract of an underlying,
//! combining filled holdings with still-working orders.
//!
//! ## Target resolution
//!
//! The target may be the underlying itself or any of its derivatives; both
//! resolve to the underlying's ticker. Only derivative contracts contribute.
//! A holding in the underlying (e.g. 100 SPY shares) never counts towards
//! `net_exposure(SPY)`.
//!
//! ## Netting
//!
//! ```text
//! net = long holdings - short holdings + buy orders - sell orders
//! ```
//!
//! For orders, the sign of the *order* quantity decides long/short intent,
//! independent of the sign of any current holding.

use chainbook_core::{Holding, InstrumentId, OpenOrder, Quantity};
use log::trace;
use rust_decimal::Decimal;

use crate::config::OrderQuantityBasis;

/// Which legs an aggregation includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegFilter {
    pub long: bool,
    pub short: bool,
}

impl LegFilter {
    pub const LONG: Self = Self {
        long: true,
        short: false,
    };
    pub const SHORT: Self = Self {
        long: false,
        short: true,
    };
    pub const BOTH: Self = Self {
        long: true,
        short: true,
    };

    /// Absolute size of `signed` if its leg is included, zero otherwise
    fn contribution(&self, signed: Quantity) -> Quantity {
        let included =
            (self.long && signed > Decimal::ZERO) || (self.short && signed < Decimal::ZERO);
        if included {
            signed.abs()
        } else {
            Decimal::ZERO
        }
    }
}

/// Components of the net exposure to one underlying, all non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExposureBreakdown {
    /// Sum of long derivative holdings
    pub holding_long: Quantity,
    /// Sum of short derivative holdings (absolute)
    pub holding_short: Quantity,
    /// Sum of working buy orders
    pub order_long: Quantity,
    /// Sum of working sell orders (absolute)
    pub order_short: Quantity,
}

impl ExposureBreakdown {
    /// Net signed exposure: positive = net long, negative = net short
    pub fn net(&self) -> Quantity {
        self.holdings_net() + self.orders_net()
    }

    /// Net of filled holdings only
    pub fn holdings_net(&self) -> Quantity {
        self.holding_long - self.holding_short
    }

    /// Net of working orders only
    pub fn orders_net(&self) -> Quantity {
        self.order_long - self.order_short
    }

    /// Flat or fully hedged
    pub fn is_flat(&self) -> bool {
        self.net().is_zero()
    }
}

/// Absolute quantity of invested derivative holdings on `target`'s
/// underlying, restricted to the legs in `legs`.
pub fn holding_quantity<'a, I>(holdings: I, target: &InstrumentId, legs: LegFilter) -> Quantity
where
    I: IntoIterator<Item = &'a Holding>,
{
    let symbol = target.target_symbol();
    holdings
        .into_iter()
        .filter(|holding| holding.is_invested() && holding.instrument.is_derivative_of(symbol))
        .map(|holding| legs.contribution(holding.quantity))
        .sum()
}

/// Absolute quantity of open orders on derivatives of `target`'s underlying,
/// restricted to the legs in `legs`. Uses the full order quantity.
pub fn open_order_quantity<'a, I>(orders: I, target: &InstrumentId, legs: LegFilter) -> Quantity
where
    I: IntoIterator<Item = &'a OpenOrder>,
{
    open_order_quantity_by(orders, target, legs, OrderQuantityBasis::Ordered)
}

/// `open_order_quantity` with an explicit quantity basis
pub fn open_order_quantity_by<'a, I>(
    orders: I,
    target: &InstrumentId,
    legs: LegFilter,
    basis: OrderQuantityBasis,
) -> Quantity
where
    I: IntoIterator<Item = &'a OpenOrder>,
{
    let symbol = target.target_symbol();
    orders
        .into_iter()
        .filter(|order| order.instrument.is_derivative_of(symbol))
        .map(|order| legs.contribution(basis.signed_quantity(order)))
        .sum()
}

/// All four exposure components for `target` in one pass over each source
pub fn exposure_breakdown<'a, H, O>(holdings: H, orders: O, target: &InstrumentId) -> ExposureBreakdown
where
    H: IntoIterator<Item = &'a Holding>,
    O: IntoIterator<Item = &'a OpenOrder>,
{
    exposure_breakdown_by(holdings, orders, target, OrderQuantityBasis::Ordered)
}

/// `exposure_breakdown` with an explicit quantity basis for orders
pub fn exposure_breakdown_by<'a, H, O>(
    holdings: H,
    orders: O,
    target: &InstrumentId,
    basis: OrderQuantityBasis,
) -> ExposureBreakdown
where
    H: IntoIterator<Item = &'a Holding>,
    O: IntoIterator<Item = &'a OpenOrder>,
{
    let symbol = target.target_symbol();
    let mut breakdown = ExposureBreakdown::default();

    for holding in holdings
        .into_iter()
        .filter(|holding| holding.is_invested() && holding.instrument.is_derivative_of(symbol))
    {
        breakdown.holding_long += LegFilter::LONG.contribution(holding.quantity);
        breakdown.holding_short += LegFilter::SHORT.contribution(holding.quantity);
    }

    for order in orders
        .into_iter()
        .filter(|order| order.instrument.is_derivative_of(symbol))
    {
        let signed = basis.signed_quantity(order);
        breakdown.order_long += LegFilter::LONG.contribution(signed);
        breakdown.order_short += LegFilter::SHORT.contribution(signed);
    }

    trace!("Exposure for {}: {:?}", symbol, breakdown);
    breakdown
}

/// Net signed exposure to `target`'s underlying across derivative holdings
/// and open orders. Empty inputs yield zero.
pub fn net_exposure<'a, H, O>(holdings: H, orders: O, target: &InstrumentId) -> Quantity
where
    H: IntoIterator<Item = &'a Holding>,
    O: IntoIterator<Item = &'a OpenOrder>,
{
    exposure_breakdown(holdings, orders, target).net()
}
