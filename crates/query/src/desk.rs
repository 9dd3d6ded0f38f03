//! Options Desk
//!
//! Accessor bundling the three host collaborators so a strategy can ask
//! chain and exposure questions without threading every snapshot through
//! each call. Holds borrows only; build a fresh desk per tick.

use chainbook_core::{
    ExpiryDate, Holding, InstrumentId, OpenOrder, OptionChain, OptionContract, Quantity,
};
use chainbook_ports::{MarketDataSource, OpenOrderSource, PortfolioLedger};

use crate::chain::locate_chain;
use crate::config::DeskConfig;
use crate::expiry::{contracts_at_distance, distinct_expirations};
use crate::exposure::{self, ExposureBreakdown, LegFilter};

/// Read-only view over market data, holdings and open orders for one tick
///
/// Each collaborator may be any port implementor, sized or not, so borrowed
/// slices and trait objects work as well as owned collections.
pub struct OptionsDesk<'a, M: ?Sized, L: ?Sized, O: ?Sized> {
    market: &'a M,
    ledger: &'a L,
    orders: &'a O,
    config: DeskConfig,
}

impl<'a, M, L, O> OptionsDesk<'a, M, L, O>
where
    M: MarketDataSource + ?Sized,
    L: PortfolioLedger + ?Sized,
    O: OpenOrderSource + ?Sized,
{
    pub fn new(market: &'a M, ledger: &'a L, orders: &'a O) -> Self {
        Self {
            market,
            ledger,
            orders,
            config: DeskConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DeskConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Option chain for `underlying` in the current slice
    pub fn chain(&self, underlying: &InstrumentId) -> Option<&'a OptionChain> {
        let market: &'a M = self.market;
        locate_chain(market.current_slice(), underlying)
    }

    /// Distinct ascending expirations available for `underlying`
    pub fn expirations(&self, underlying: &InstrumentId) -> Option<Vec<ExpiryDate>> {
        self.chain(underlying).map(distinct_expirations)
    }

    /// Contracts of the `distance`-th nearest expiration for `underlying`
    pub fn contracts_at_expiry(
        &self,
        underlying: &InstrumentId,
        distance: usize,
    ) -> Option<Vec<&'a OptionContract>> {
        contracts_at_distance(self.chain(underlying)?, distance)
    }

    fn holdings(&self) -> impl Iterator<Item = &'a Holding> {
        let ledger: &'a L = self.ledger;
        ledger.holdings()
    }

    /// Orders whose status the config treats as open
    fn working_orders(&self) -> impl Iterator<Item = &'a OpenOrder> + '_ {
        let orders: &'a O = self.orders;
        orders
            .open_orders()
            .filter(|order| self.config.counts_as_open(order.status))
    }

    /// Absolute quantity of derivative holdings on `target`'s underlying
    pub fn holding_quantity(&self, target: &InstrumentId, legs: LegFilter) -> Quantity {
        exposure::holding_quantity(self.holdings(), target, legs)
    }

    /// Absolute quantity of working orders on derivatives of `target`'s
    /// underlying, using the configured quantity basis
    pub fn open_order_quantity(&self, target: &InstrumentId, legs: LegFilter) -> Quantity {
        exposure::open_order_quantity_by(
            self.working_orders(),
            target,
            legs,
            self.config.order_quantity,
        )
    }

    /// Long and short legs of holdings and working orders on `target`'s
    /// underlying
    pub fn exposure_breakdown(&self, target: &InstrumentId) -> ExposureBreakdown {
        exposure::exposure_breakdown_by(
            self.holdings(),
            self.working_orders(),
            target,
            self.config.order_quantity,
        )
    }

    /// Net signed exposure to `target`'s underlying
    pub fn net_exposure(&self, target: &InstrumentId) -> Quantity {
        self.exposure_breakdown(target).net()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderQuantityBasis;
    use chainbook_core::{ChainKey, OptionChains, OptionRight, OrderStatus, Slice};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn spy() -> InstrumentId {
        InstrumentId::new("SPY")
    }

    fn slice() -> Slice {
        let spy = spy();
        let near = NaiveDate::from_ymd_opt(2024, 1, 19).unwrap();
        let far = NaiveDate::from_ymd_opt(2024, 2, 16).unwrap();
        let chain = OptionChain::new(vec![
            OptionContract::new(&spy, far, dec!(470), OptionRight::Call),
            OptionContract::new(&spy, near, dec!(470), OptionRight::Call),
        ]);
        Slice::new(Utc.with_ymd_and_hms(2024, 1, 10, 14, 30, 0).unwrap())
            .with_option_chains(OptionChains::new().with_chain(ChainKey::canonical(spy), chain))
    }

    #[test]
    fn test_chain_queries() {
        let market = slice();
        let holdings: Vec<Holding> = Vec::new();
        let orders: Vec<OpenOrder> = Vec::new();
        let desk = OptionsDesk::new(&market, &holdings, &orders);

        assert_eq!(desk.chain(&spy()).map(OptionChain::len), Some(2));
        assert_eq!(
            desk.expirations(&spy()),
            Some(vec![
                NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
            ])
        );
        let near = desk.contracts_at_expiry(&spy(), 0).unwrap();
        assert_eq!(near.len(), 1);
        assert!(desk.contracts_at_expiry(&spy(), 2).is_none());
        assert!(desk.chain(&InstrumentId::new("QQQ")).is_none());
    }

    #[test]
    fn test_no_market_data_still_computes_exposure() {
        let market: Option<Slice> = None;
        let call = InstrumentId::derivative("SPY 240119C00470000", spy());
        let holdings = vec![Holding::new(call.clone(), dec!(3))];
        let orders = vec![OpenOrder::market(call, dec!(2))];
        let desk = OptionsDesk::new(&market, &holdings, &orders);

        assert!(desk.chain(&spy()).is_none());
        assert_eq!(desk.net_exposure(&spy()), dec!(5));
    }

    #[test]
    fn test_config_filters_and_basis() {
        let market: Option<Slice> = None;
        let call = InstrumentId::derivative("SPY 240119C00470000", spy());
        let holdings: Vec<Holding> = Vec::new();
        let orders = vec![
            OpenOrder::market(call.clone(), dec!(10)).with_filled(dec!(4)),
            OpenOrder::market(call.clone(), dec!(-2)).with_status(OrderStatus::Canceled),
        ];

        let desk = OptionsDesk::new(&market, &holdings, &orders);
        assert_eq!(desk.open_order_quantity(&spy(), LegFilter::LONG), dec!(10));
        assert_eq!(desk.open_order_quantity(&spy(), LegFilter::SHORT), dec!(0));

        let desk = desk.with_config(
            DeskConfig::default().with_order_quantity(OrderQuantityBasis::Remaining),
        );
        assert_eq!(desk.config().order_quantity, OrderQuantityBasis::Remaining);
        assert_eq!(desk.net_exposure(&call), dec!(6));
        assert_eq!(desk.holding_quantity(&spy(), LegFilter::BOTH), dec!(0));
    }

    #[test]
    fn test_borrowed_slices_and_trait_objects() {
        let market = slice();
        let call = InstrumentId::derivative("SPY 240119C00470000", spy());
        let holdings = vec![Holding::new(call.clone(), dec!(-2))];
        let orders = vec![OpenOrder::market(call, dec!(5))];

        let desk = OptionsDesk::new(&market, holdings.as_slice(), orders.as_slice());
        assert_eq!(desk.net_exposure(&spy()), dec!(3));

        let ledger: &dyn PortfolioLedger = &holdings;
        let book: &dyn OpenOrderSource = &orders;
        let desk = OptionsDesk::new(&market, ledger, book);
        assert_eq!(desk.net_exposure(&spy()), dec!(3));
        assert_eq!(desk.expirations(&spy()).map(|dates| dates.len()), Some(2));
    }

    #[test]
    fn test_custom_open_statuses() {
        let market: Option<Slice> = None;
        let call = InstrumentId::derivative("SPY 240119C00470000", spy());
        let holdings: Vec<Holding> = Vec::new();
        let orders = vec![
            OpenOrder::market(call.clone(), dec!(4)).with_status(OrderStatus::New),
            OpenOrder::market(call, dec!(-1)),
        ];

        let desk = OptionsDesk::new(&market, &holdings, &orders);
        assert_eq!(desk.net_exposure(&spy()), dec!(3));

        // Staged orders are not yet at the broker
        let desk = desk.with_config(
            DeskConfig::default().with_open_statuses(vec![
                OrderStatus::Submitted,
                OrderStatus::PartiallyFilled,
            ]),
        );
        assert_eq!(desk.open_order_quantity(&spy(), LegFilter::LONG), dec!(0));
        assert_eq!(desk.net_exposure(&spy()), dec!(-1));
    }
}
