// crates/loms/tests/infrastructure/loms_handler_it.rs

use std::sync::Arc;
use std::time::Duration;
use loms::application::workers::OutboxPublisher;
use loms::domain::events::OrderEvent;
use loms::domain::value_objects::OrderStatus;
use loms::infrastructure::api::dto::{
    ItemDto, OrderCancelRequest, OrderCreateRequest, OrderInfoRequest, OrderPayRequest, StocksInfoRequest,
};
use loms::infrastructure::api::LomsHandler;
use loms::infrastructure::bootstrap::LomsContext;
use shared_kernel::application::ports::MessageProducerStub;
use shared_kernel::application::CallContext;
use shared_kernel::errors::ErrorCode;
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use crate::common::{count_rows, seed_stock, setup_postgres_test_db};

const TOPIC: &str = "loms.order-events";

async fn setup_context() -> (LomsContext, PostgresTestContext) {
    let ctx = setup_postgres_test_db().await;
    seed_stock(&ctx.pool(), 1, 4, 0).await;

    let db = PgBalancer::single(ctx.pool());
    let loms = LomsContext::from_balancers(db.clone(), vec![db], TOPIC);
    (loms, ctx)
}

fn create_request(count: u32) -> OrderCreateRequest {
    OrderCreateRequest {
        user: 1,
        items: vec![ItemDto { sku: 1, count }],
    }
}

async fn available(handler: &LomsHandler, call: &CallContext) -> u64 {
    handler.stocks_info(call, StocksInfoRequest { sku: 1 }).await.unwrap().count
}

async fn status(handler: &LomsHandler, call: &CallContext, order_id: i64) -> String {
    handler.order_info(call, OrderInfoRequest { order_id }).await.unwrap().status
}

#[tokio::test]
async fn test_order_lifecycle_against_postgres() {
    let (loms, _ctx) = setup_context().await;
    let handler = loms.handler();
    let call = CallContext::new();

    let first = handler.order_create(&call, create_request(1)).await.unwrap().order_id;
    assert_eq!(status(&handler, &call, first).await, "awaiting payment");
    assert_eq!(available(&handler, &call).await, 3);

    handler.order_pay(&call, OrderPayRequest { order_id: first }).await.unwrap();
    assert_eq!(status(&handler, &call, first).await, "payed");
    assert_eq!(available(&handler, &call).await, 3);

    let second = handler.order_create(&call, create_request(1)).await.unwrap().order_id;
    assert_eq!(available(&handler, &call).await, 2);

    handler.order_cancel(&call, OrderCancelRequest { order_id: second }).await.unwrap();
    assert_eq!(status(&handler, &call, second).await, "cancelled");
    assert_eq!(available(&handler, &call).await, 3);

    let first_info = handler.order_info(&call, OrderInfoRequest { order_id: first }).await.unwrap();
    let again = handler.order_info(&call, OrderInfoRequest { order_id: first }).await.unwrap();
    assert_eq!(first_info, again);
}

#[tokio::test]
async fn test_insufficient_stock_against_postgres() {
    let (loms, ctx) = setup_context().await;
    let handler = loms.handler();
    let call = CallContext::new();

    let err = handler.order_create(&call, create_request(5)).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientStock);
    assert_eq!(available(&handler, &call).await, 4);
    let listed = handler.order_list(&call).await.unwrap();
    assert_eq!(listed.orders.len(), 1);
    assert_eq!(listed.orders[0].status, "failed");
    assert_eq!(count_rows(&ctx.pool(), "outbox").await, 2);
}

#[tokio::test]
async fn test_every_transition_is_published_once() {
    let (loms, _ctx) = setup_context().await;
    let handler = loms.handler();
    let call = CallContext::new();

    let order_id = handler.order_create(&call, create_request(2)).await.unwrap().order_id;
    handler.order_pay(&call, OrderPayRequest { order_id }).await.unwrap();

    let (producer, reports) = MessageProducerStub::new();
    let producer = Arc::new(producer);
    let outboxes = loms.outboxes();
    let publisher = OutboxPublisher::new(outboxes.clone(), producer.clone(), reports, Duration::from_millis(50));

    assert_eq!(publisher.handle_events(outboxes[0].as_ref()).await.unwrap(), 3);
    assert_eq!(publisher.handle_events(outboxes[0].as_ref()).await.unwrap(), 0);

    let sent = producer.sent();
    assert!(sent.iter().all(|m| m.key == order_id.to_string() && m.topic == TOPIC));
    let statuses: Vec<OrderStatus> = sent
        .iter()
        .map(|m| OrderEvent::from_bytes(&m.payload).unwrap().status)
        .collect();
    assert_eq!(statuses, vec![OrderStatus::New, OrderStatus::AwaitingPayment, OrderStatus::Paid]);
}
