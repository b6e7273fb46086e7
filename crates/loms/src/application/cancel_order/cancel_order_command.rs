// crates/loms/src/application/cancel_order/cancel_order_command.rs

use serde::Deserialize;
use crate::domain::value_objects::OrderId;

#[derive(Debug, Deserialize, Clone)]
pub struct CancelOrderCommand {
    pub order_id: OrderId,
}
