use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::InstrumentId;
use crate::values::{ExpiryDate, Price};

/// Option right: Call (right to buy) or Put (right to sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionRight {
    Call,
    Put,
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionRight::Call => write!(f, "C"),
            OptionRight::Put => write!(f, "P"),
        }
    }
}

/// Option exercise style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionStyle {
    /// Can exercise any time before expiry
    #[default]
    American,
    /// Can only exercise at expiry
    European,
}

/// Quote fields carried alongside a contract in a chain snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub bid: Price,
    pub ask: Price,
    pub last: Price,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub open_interest: u64,
}

impl OptionQuote {
    /// Create a two-sided quote
    pub fn new(bid: Price, ask: Price) -> Self {
        Self {
            bid,
            ask,
            ..Default::default()
        }
    }

    /// Midpoint of bid/ask, falling back to last trade when one side is missing
    pub fn mid_price(&self) -> Price {
        if self.bid > Decimal::ZERO && self.ask > Decimal::ZERO {
            (self.bid + self.ask) / dec!(2)
        } else {
            self.last
        }
    }
}

/// An option contract as quoted in a chain (e.g. SPY 240119C00470000)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Contract identifier; always a derivative of the chain's underlying
    pub id: InstrumentId,
    /// Expiration date
    pub expiry: ExpiryDate,
    /// Strike price
    pub strike: Price,
    /// Call or put
    pub right: OptionRight,
    /// Exercise style
    #[serde(default)]
    pub style: OptionStyle,
    /// Contract multiplier (shares per contract)
    pub multiplier: Decimal,
    /// Latest quote for this contract
    #[serde(default)]
    pub quote: OptionQuote,
}

impl OptionContract {
    /// Create a new contract on `underlying`
    ///
    /// The symbol follows the OSI layout: root, expiry as `yymmdd`, right,
    /// and the strike times 1000 padded to eight digits.
    pub fn new(
        underlying: &InstrumentId,
        expiry: ExpiryDate,
        strike: Price,
        right: OptionRight,
    ) -> Self {
        let strike_code = (strike * dec!(1000)).trunc().to_string();
        let symbol = format!(
            "{} {}{}{:0>8}",
            underlying.as_str(),
            expiry.format("%y%m%d"),
            right,
            strike_code
        );

        Self {
            id: InstrumentId::derivative(symbol, underlying.clone()),
            expiry,
            strike,
            right,
            style: OptionStyle::American,
            multiplier: dec!(100),
            quote: OptionQuote::default(),
        }
    }

    /// Create with custom symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.id.value = symbol.into();
        self
    }

    pub fn with_style(mut self, style: OptionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_multiplier(mut self, mult: Decimal) -> Self {
        self.multiplier = mult;
        self
    }

    pub fn with_quote(mut self, quote: OptionQuote) -> Self {
        self.quote = quote;
        self
    }

    /// Contract symbol
    pub fn symbol(&self) -> &str {
        self.id.as_str()
    }

    /// Underlying instrument this contract is written on
    pub fn underlying(&self) -> Option<&InstrumentId> {
        self.id.underlying()
    }

    pub fn is_call(&self) -> bool {
        self.right == OptionRight::Call
    }

    pub fn is_put(&self) -> bool {
        self.right == OptionRight::Put
    }

    /// Check if option has expired; a contract still trades on its expiry date
    pub fn is_expired(&self, today: ExpiryDate) -> bool {
        today > self.expiry
    }

    /// Calendar days remaining until expiry (negative once expired)
    pub fn days_to_expiry(&self, today: ExpiryDate) -> i64 {
        (self.expiry - today).num_days()
    }

    /// Calculate intrinsic value per share
    pub fn intrinsic_value(&self, spot_price: Price) -> Decimal {
        match self.right {
            OptionRight::Call => (spot_price - self.strike).max(Decimal::ZERO),
            OptionRight::Put => (self.strike - spot_price).max(Decimal::ZERO),
        }
    }

    /// Check if option is in the money
    pub fn is_in_the_money(&self, spot_price: Price) -> bool {
        self.intrinsic_value(spot_price) > Decimal::ZERO
    }
}

impl std::fmt::Display for OptionContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan19() -> ExpiryDate {
        NaiveDate::from_ymd_opt(2024, 1, 19).unwrap()
    }

    #[test]
    fn test_option_creation() {
        let spy = InstrumentId::new("SPY");
        let call = OptionContract::new(&spy, jan19(), dec!(470), OptionRight::Call);

        assert_eq!(call.symbol(), "SPY 240119C00470000");
        assert_eq!(call.underlying(), Some(&spy));
        assert_eq!(call.multiplier, dec!(100));
        assert_eq!(call.style, OptionStyle::American);
        assert!(call.is_call());
        assert!(!call.is_put());
    }

    #[test]
    fn test_builders() {
        let spx = InstrumentId::new("SPX");
        let weekly = OptionContract::new(&spx, jan19(), dec!(4800), OptionRight::Put)
            .with_symbol("SPXW 240119P04800000")
            .with_style(OptionStyle::European)
            .with_multiplier(dec!(100))
            .with_quote(OptionQuote::new(dec!(41.10), dec!(41.50)));

        assert_eq!(weekly.symbol(), "SPXW 240119P04800000");
        assert_eq!(weekly.underlying(), Some(&spx));
        assert_eq!(weekly.style, OptionStyle::European);
        assert_eq!(weekly.quote.mid_price(), dec!(41.30));
    }

    #[test]
    fn test_fractional_strike_symbol() {
        let spy = InstrumentId::new("SPY");
        let put = OptionContract::new(&spy, jan19(), dec!(452.5), OptionRight::Put);

        assert_eq!(put.symbol(), "SPY 240119P00452500");
    }

    #[test]
    fn test_call_intrinsic_value() {
        let call = OptionContract::new(&"SPY".into(), jan19(), dec!(470), OptionRight::Call);

        // ITM call
        assert_eq!(call.intrinsic_value(dec!(480)), dec!(10));
        // ATM call
        assert_eq!(call.intrinsic_value(dec!(470)), dec!(0));
        // OTM call
        assert_eq!(call.intrinsic_value(dec!(460)), dec!(0));
        assert!(call.is_in_the_money(dec!(480)));
    }

    #[test]
    fn test_put_intrinsic_value() {
        let put = OptionContract::new(&"SPY".into(), jan19(), dec!(470), OptionRight::Put);

        assert_eq!(put.intrinsic_value(dec!(480)), dec!(0));
        assert_eq!(put.intrinsic_value(dec!(455)), dec!(15));
        assert!(!put.is_in_the_money(dec!(470)));
    }

    #[test]
    fn test_option_expiry() {
        let call = OptionContract::new(&"SPY".into(), jan19(), dec!(470), OptionRight::Call);

        let before = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

        assert!(!call.is_expired(before));
        assert!(!call.is_expired(jan19()));
        assert!(call.is_expired(after));
        assert_eq!(call.days_to_expiry(before), 7);
        assert_eq!(call.days_to_expiry(after), -1);
    }

    #[test]
    fn test_mid_price() {
        let quote = OptionQuote::new(dec!(1.20), dec!(1.30));
        assert_eq!(quote.mid_price(), dec!(1.25));

        let one_sided = OptionQuote {
            bid: Decimal::ZERO,
            ask: dec!(0.05),
            last: dec!(0.03),
            ..Default::default()
        };
        assert_eq!(one_sided.mid_price(), dec!(0.03));
    }
}
