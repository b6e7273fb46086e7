// crates/loms/src/application/pay_order/pay_order_command.rs

use serde::Deserialize;
use crate::domain::value_objects::OrderId;

#[derive(Debug, Deserialize, Clone)]
pub struct PayOrderCommand {
    pub order_id: OrderId,
}
