mod holding;
mod order;
mod order_status;
mod order_type;
mod side;

pub use holding::Holding;
pub use order::{OpenOrder, OrderId};
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use side::Side;
