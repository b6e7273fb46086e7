// crates/loms/src/application/get_order_info/get_order_info_query.rs

use serde::Deserialize;
use crate::domain::value_objects::OrderId;

#[derive(Debug, Deserialize, Clone)]
pub struct GetOrderInfoQuery {
    pub order_id: OrderId,
}
