// crates/loms/src/application/pay_order/mod.rs

mod pay_order_command;
mod pay_order_use_case;


pub use pay_order_command::PayOrderCommand;
pub use pay_order_use_case::PayOrderUseCase;
