// crates/loms/src/application/list_orders/mod.rs

mod list_orders_use_case;


pub use list_orders_use_case::ListOrdersUseCase;
