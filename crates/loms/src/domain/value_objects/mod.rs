// crates/loms/src/domain/value_objects/mod.rs

mod ids;
mod order_status;

pub use ids::{OrderId, Sku, UserId};
pub use order_status::OrderStatus;
