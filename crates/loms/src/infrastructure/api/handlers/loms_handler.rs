// crates/loms/src/infrastructure/api/handlers/loms_handler.rs

use std::sync::Arc;
use shared_kernel::application::{guard, CallContext};
use shared_kernel::errors::AppResult;

use crate::application::cancel_order::CancelOrderUseCase;
use crate::application::create_order::CreateOrderUseCase;
use crate::application::get_order_info::GetOrderInfoUseCase;
use crate::application::get_stocks_info::GetStocksInfoUseCase;
use crate::application::list_orders::ListOrdersUseCase;
use crate::application::pay_order::PayOrderUseCase;
use crate::domain::repositories::{OrderRepository, StockRepository};
use crate::infrastructure::api::dto::{
    OrderCancelRequest, OrderCreateRequest, OrderCreateResponse, OrderInfoRequest, OrderInfoResponse,
    OrderListRequest, OrderListResponse, OrderPayRequest, StocksInfoRequest, StocksInfoResponse,
};

/// Order/inventory RPC surface. Every call goes through [`guard`], so requests are
/// validated, cancellable, and panic-safe regardless of the transport in front.
pub struct LomsHandler {
    create_order_uc: Arc<CreateOrderUseCase>,
    get_order_info_uc: Arc<GetOrderInfoUseCase>,
    pay_order_uc: Arc<PayOrderUseCase>,
    cancel_order_uc: Arc<CancelOrderUseCase>,
    get_stocks_info_uc: Arc<GetStocksInfoUseCase>,
    list_orders_uc: Arc<ListOrdersUseCase>,
}

impl LomsHandler {
    pub fn new(order_repo: Arc<dyn OrderRepository>, stock_repo: Arc<dyn StockRepository>) -> Self {
        Self {
            create_order_uc: Arc::new(CreateOrderUseCase::new(order_repo.clone(), stock_repo.clone())),
            get_order_info_uc: Arc::new(GetOrderInfoUseCase::new(order_repo.clone())),
            pay_order_uc: Arc::new(PayOrderUseCase::new(order_repo.clone(), stock_repo.clone())),
            cancel_order_uc: Arc::new(CancelOrderUseCase::new(order_repo.clone(), stock_repo.clone())),
            get_stocks_info_uc: Arc::new(GetStocksInfoUseCase::new(stock_repo)),
            list_orders_uc: Arc::new(ListOrdersUseCase::new(order_repo)),
        }
    }

    pub async fn order_create(&self, ctx: &CallContext, request: OrderCreateRequest) -> AppResult<OrderCreateResponse> {
        guard("OrderCreate", ctx, request, |req| async move {
            let order_id = self.create_order_uc.execute(req.into()).await?;
            Ok(OrderCreateResponse { order_id: order_id.value() })
        })
        .await
    }

    pub async fn order_info(&self, ctx: &CallContext, request: OrderInfoRequest) -> AppResult<OrderInfoResponse> {
        guard("OrderInfo", ctx, request, |req| async move {
            let order = self.get_order_info_uc.execute(req.into()).await?;
            Ok(OrderInfoResponse::from(order))
        })
        .await
    }

    pub async fn order_pay(&self, ctx: &CallContext, request: OrderPayRequest) -> AppResult<()> {
        guard("OrderPay", ctx, request, |req| async move {
            self.pay_order_uc.execute(req.into()).await
        })
        .await
    }

    pub async fn order_cancel(&self, ctx: &CallContext, request: OrderCancelRequest) -> AppResult<()> {
        guard("OrderCancel", ctx, request, |req| async move {
            self.cancel_order_uc.execute(req.into()).await
        })
        .await
    }

    pub async fn stocks_info(&self, ctx: &CallContext, request: StocksInfoRequest) -> AppResult<StocksInfoResponse> {
        guard("StocksInfo", ctx, request, |req| async move {
            let count = self.get_stocks_info_uc.execute(req.into()).await?;
            Ok(StocksInfoResponse { count })
        })
        .await
    }

    pub async fn order_list(&self, ctx: &CallContext) -> AppResult<OrderListResponse> {
        guard("OrderList", ctx, OrderListRequest::default(), |_| async move {
            let orders = self.list_orders_uc.execute().await?;
            Ok(OrderListResponse::from(orders))
        })
        .await
    }
}
