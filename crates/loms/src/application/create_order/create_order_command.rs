// crates/loms/src/application/create_order/create_order_command.rs

use serde::Deserialize;
use crate::domain::entities::OrderItem;
use crate::domain::value_objects::UserId;

#[derive(Debug, Deserialize, Clone)]
pub struct CreateOrderCommand {
    pub user: UserId,
    pub items: Vec<OrderItem>,
}
