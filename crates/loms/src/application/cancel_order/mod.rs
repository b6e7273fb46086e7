// crates/loms/src/application/cancel_order/mod.rs

mod cancel_order_command;
mod cancel_order_use_case;


pub use cancel_order_command::CancelOrderCommand;
pub use cancel_order_use_case::CancelOrderUseCase;
