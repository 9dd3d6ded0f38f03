use std::collections::HashMap;

use chainbook_core::{Holding, InstrumentId};

/// Port for the host portfolio ledger
///
/// Yields every holding the host tracks, including flat (zero quantity)
/// entries. Consumers filter those out themselves.
pub trait PortfolioLedger {
    fn holdings(&self) -> Box<dyn Iterator<Item = &Holding> + '_>;
}

impl PortfolioLedger for HashMap<InstrumentId, Holding> {
    fn holdings(&self) -> Box<dyn Iterator<Item = &Holding> + '_> {
        Box::new(self.values())
    }
}

impl PortfolioLedger for [Holding] {
    fn holdings(&self) -> Box<dyn Iterator<Item = &Holding> + '_> {
        Box::new(self.iter())
    }
}

impl PortfolioLedger for Vec<Holding> {
    fn holdings(&self) -> Box<dyn Iterator<Item = &Holding> + '_> {
        Box::new(self.iter())
    }
}
