// crates/loms/src/domain/entities/mod.rs

mod order;
mod stock;

pub use order::{NewOrder, Order, OrderItem};
pub use stock::Stock;
