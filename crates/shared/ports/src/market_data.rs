use chainbook_core::Slice;

/// Port for the market data feed
///
/// Supplies the slice for the current evaluation tick. `None` means the feed
/// has produced nothing yet (e.g. before the first tick).
pub trait MarketDataSource {
    /// Slice for the current tick
    fn current_slice(&self) -> Option<&Slice>;
}

impl MarketDataSource for Slice {
    fn current_slice(&self) -> Option<&Slice> {
        Some(self)
    }
}

impl MarketDataSource for Option<Slice> {
    fn current_slice(&self) -> Option<&Slice> {
        self.as_ref()
    }
}
