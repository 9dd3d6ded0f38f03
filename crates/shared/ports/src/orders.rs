use std::collections::HashMap;

use chainbook_core::{OpenOrder, OrderId};

/// Port for the host order management subsystem
///
/// Yields the orders that are working at call time. The set changes as fills
/// and cancellations arrive, so two calls may observe different orders.
pub trait OpenOrderSource {
    fn open_orders(&self) -> Box<dyn Iterator<Item = &OpenOrder> + '_>;
}

impl OpenOrderSource for HashMap<OrderId, OpenOrder> {
    fn open_orders(&self) -> Box<dyn Iterator<Item = &OpenOrder> + '_> {
        Box::new(self.values())
    }
}

impl OpenOrderSource for [OpenOrder] {
    fn open_orders(&self) -> Box<dyn Iterator<Item = &OpenOrder> + '_> {
        Box::new(self.iter())
    }
}

impl OpenOrderSource for Vec<OpenOrder> {
    fn open_orders(&self) -> Box<dyn Iterator<Item = &OpenOrder> + '_> {
        Box::new(self.iter())
    }
}
