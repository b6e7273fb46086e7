// crates/loms/src/application/mod.rs

pub mod cancel_order;
pub mod create_order;
pub mod get_order_info;
pub mod get_stocks_info;
pub mod list_orders;
pub mod pay_order;
pub mod workers;

mod item_steps;
