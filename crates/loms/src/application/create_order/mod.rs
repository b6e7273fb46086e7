// crates/loms/src/application/create_order/mod.rs

mod create_order_command;
mod create_order_use_case;


pub use create_order_command::CreateOrderCommand;
pub use create_order_use_case::CreateOrderUseCase;
