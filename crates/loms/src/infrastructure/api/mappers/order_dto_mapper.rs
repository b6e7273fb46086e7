// crates/loms/src/infrastructure/api/mappers/order_dto_mapper.rs

use crate::application::cancel_order::CancelOrderCommand;
use crate::application::create_order::CreateOrderCommand;
use crate::application::get_order_info::GetOrderInfoQuery;
use crate::application::get_stocks_info::GetStocksInfoQuery;
use crate::application::pay_order::PayOrderCommand;
use crate::domain::entities::{Order, OrderItem};
use crate::domain::value_objects::{OrderId, Sku, UserId};
use crate::infrastructure::api::dto::{
    ItemDto, OrderCancelRequest, OrderCreateRequest, OrderInfoRequest, OrderInfoResponse, OrderListResponse,
    OrderPayRequest, OrderSummaryDto, StocksInfoRequest,
};

impl From<ItemDto> for OrderItem {
    fn from(dto: ItemDto) -> Self {
        OrderItem::new(Sku::new(dto.sku), dto.count)
    }
}

impl From<OrderItem> for ItemDto {
    fn from(item: OrderItem) -> Self {
        ItemDto { sku: item.sku.value(), count: item.count }
    }
}

impl From<OrderCreateRequest> for CreateOrderCommand {
    fn from(req: OrderCreateRequest) -> Self {
        CreateOrderCommand {
            user: UserId::new(req.user),
            items: req.items.into_iter().map(OrderItem::from).collect(),
        }
    }
}

impl From<OrderInfoRequest> for GetOrderInfoQuery {
    fn from(req: OrderInfoRequest) -> Self {
        GetOrderInfoQuery { order_id: OrderId::new(req.order_id) }
    }
}

impl From<OrderPayRequest> for PayOrderCommand {
    fn from(req: OrderPayRequest) -> Self {
        PayOrderCommand { order_id: OrderId::new(req.order_id) }
    }
}

impl From<OrderCancelRequest> for CancelOrderCommand {
    fn from(req: OrderCancelRequest) -> Self {
        CancelOrderCommand { order_id: OrderId::new(req.order_id) }
    }
}

impl From<StocksInfoRequest> for GetStocksInfoQuery {
    fn from(req: StocksInfoRequest) -> Self {
        GetStocksInfoQuery { sku: Sku::new(req.sku) }
    }
}

impl From<Order> for OrderInfoResponse {
    fn from(order: Order) -> Self {
        OrderInfoResponse {
            status: order.status.as_str().to_string(),
            user: order.user.value(),
            items: order.items.into_iter().map(ItemDto::from).collect(),
        }
    }
}

impl From<Vec<Order>> for OrderListResponse {
    fn from(orders: Vec<Order>) -> Self {
        OrderListResponse {
            orders: orders
                .into_iter()
                .map(|o| OrderSummaryDto {
                    order_id: o.id.value(),
                    status: o.status.as_str().to_string(),
                    user: o.user.value(),
                    items: o.items.into_iter().map(ItemDto::from).collect(),
                })
                .collect(),
        }
    }
}
