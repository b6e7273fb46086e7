// crates/loms/src/application/get_order_info/mod.rs

mod get_order_info_query;
mod get_order_info_use_case;


pub use get_order_info_query::GetOrderInfoQuery;
pub use get_order_info_use_case::GetOrderInfoUseCase;
