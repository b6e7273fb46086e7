// crates/loms/src/infrastructure/api/dto/mod.rs

mod requests;
mod responses;

pub use requests::{
    ItemDto, OrderCancelRequest, OrderCreateRequest, OrderInfoRequest, OrderListRequest, OrderPayRequest, StocksInfoRequest,
};
pub use responses::{OrderCreateResponse, OrderInfoResponse, OrderListResponse, OrderSummaryDto, StocksInfoResponse};
