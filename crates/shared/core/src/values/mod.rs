use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Signed quantity: positive = long/buy, negative = short/sell
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Calendar date an option contract expires on
pub type ExpiryDate = NaiveDate;

/// Ticker / display string of an instrument
pub type Symbol = String;
