// crates/loms/src/application/get_stocks_info/mod.rs

mod get_stocks_info_query;
mod get_stocks_info_use_case;


pub use get_stocks_info_query::GetStocksInfoQuery;
pub use get_stocks_info_use_case::GetStocksInfoUseCase;
