// crates/loms/src/infrastructure/postgres/rows/postgres_order_row.rs

use sqlx::FromRow;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::{Order, OrderItem};
use crate::domain::value_objects::{OrderId, OrderStatus, Sku, UserId};

#[derive(Debug, FromRow)]
pub struct PostgresOrderRow {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
}

#[derive(Debug, FromRow)]
pub struct PostgresOrderItemRow {
    pub sku: i64,
    pub count: i64,
}

/// Header joined with one of its items. `sku`/`count` are NULL for an order without items.
#[derive(Debug, FromRow)]
pub struct PostgresOrderListRow {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub sku: Option<i64>,
    pub count: Option<i64>,
}

impl PostgresOrderRow {
    pub fn into_order(self, items: Vec<PostgresOrderItemRow>) -> Result<Order> {
        Ok(Order {
            id: OrderId::new(self.id),
            user: UserId::new(self.user_id),
            status: self.status.parse::<OrderStatus>()?,
            items: items.into_iter().map(OrderItem::try_from).collect::<Result<_>>()?,
        })
    }
}

impl TryFrom<PostgresOrderItemRow> for OrderItem {
    type Error = DomainError;

    fn try_from(row: PostgresOrderItemRow) -> Result<Self> {
        let sku = u32::try_from(row.sku)
            .map_err(|_| DomainError::Internal(format!("stored sku {} out of range", row.sku)))?;
        let count = u32::try_from(row.count)
            .map_err(|_| DomainError::Internal(format!("stored count {} out of range", row.count)))?;
        Ok(OrderItem::new(Sku::new(sku), count))
    }
}

/// Folds joined rows into orders. Rows of one order must be adjacent.
pub fn group_order_rows(rows: Vec<PostgresOrderListRow>) -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = Vec::new();

    for row in rows {
        let item = match (row.sku, row.count) {
            (Some(sku), Some(count)) => Some(OrderItem::try_from(PostgresOrderItemRow { sku, count })?),
            _ => None,
        };

        match orders.last_mut() {
            Some(last) if last.id.value() == row.id => last.items.extend(item),
            _ => orders.push(Order {
                id: OrderId::new(row.id),
                user: UserId::new(row.user_id),
                status: row.status.parse::<OrderStatus>()?,
                items: item.into_iter().collect(),
            }),
        }
    }
    Ok(orders)
}
