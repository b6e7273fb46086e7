// crates/loms/src/infrastructure/postgres/repositories/postgres_order_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use futures::future::try_join_all;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::sharding::{ShardManager, SHARD_ID_SPACE};
use crate::domain::entities::{NewOrder, Order};
use crate::domain::repositories::{OrderRepository, OrderWriteHook};
use crate::domain::value_objects::{OrderId, OrderStatus};
use crate::infrastructure::postgres::rows::{
    group_order_rows, PostgresOrderItemRow, PostgresOrderListRow, PostgresOrderRow,
};

/// Orders spread over shards.
///
/// New orders land on `murmur3(user) mod N`. Their id is allocated as
/// `nextval * SHARD_ID_SPACE + shard`, so every later lookup finds the shard from the id alone.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    shards: Arc<ShardManager<PgBalancer>>,
}

impl PostgresOrderRepository {
    pub fn new(shards: Arc<ShardManager<PgBalancer>>) -> Self {
        Self { shards }
    }

    /// Shard owning `id`. An id pointing past the configured shards cannot exist.
    fn shard_of(&self, id: OrderId) -> Result<&PgBalancer> {
        let index = self.shards.shard_index_from_id(id.value());
        self.shards.pick(index).map_err(|e| match e {
            DomainError::ShardOutOfRange { .. } => Order::not_found(id),
            other => other,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder, hook: Option<&dyn OrderWriteHook>) -> Result<OrderId> {
        let shard = self.shards.shard_index(&order.user.shard_key());
        let db = self.shards.pick(shard)?;
        let status = order.status.or_new();

        let mut tx = db.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (id, user_id, status, shard_id)
            VALUES (nextval('order_id_seq') * $1 + $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(SHARD_ID_SPACE)
        .bind(shard as i64)
        .bind(order.user.value())
        .bind(status.as_str())
        .bind(shard as i32)
        .fetch_one(&mut **tx.get_mut())
        .await
        .map_domain_infra("Order.create")?;

        let skus: Vec<i64> = order.items.iter().map(|i| i.sku.value() as i64).collect();
        let counts: Vec<i64> = order.items.iter().map(|i| i.count as i64).collect();
        let positions: Vec<i32> = (0..order.items.len() as i32).collect();

        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, sku, count, position)
            SELECT $1, sku, count, position
            FROM UNNEST($2::BIGINT[], $3::BIGINT[], $4::INT[]) AS t(sku, count, position)
            "#,
        )
        .bind(id)
        .bind(&skus)
        .bind(&counts)
        .bind(&positions)
        .execute(&mut **tx.get_mut())
        .await
        .map_domain_infra("Order.create items")?;

        let order_id = OrderId::new(id);
        if let Some(hook) = hook {
            hook.run(&mut tx, order_id, status).await?;
        }

        tx.commit().await?;
        tracing::debug!(order_id = id, shard, status = %status, "order created");
        Ok(order_id)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Order> {
        let db = self.shard_of(id)?;

        let header = sqlx::query_as::<_, PostgresOrderRow>(
            "SELECT id, user_id, status FROM orders WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(db.primary())
        .await
        .map_domain::<Order>(id)?
        .ok_or_else(|| Order::not_found(id))?;

        let items = sqlx::query_as::<_, PostgresOrderItemRow>(
            "SELECT sku, count FROM order_items WHERE order_id = $1 ORDER BY position ASC, id ASC",
        )
        .bind(id.value())
        .fetch_all(db.primary())
        .await
        .map_domain::<Order>(id)?;

        header.into_order(items)
    }

    async fn set_status(&self, id: OrderId, status: OrderStatus, hook: Option<&dyn OrderWriteHook>) -> Result<()> {
        let db = self.shard_of(id)?;
        let mut tx = db.begin().await?;

        let from: Vec<String> = status.predecessors().iter().map(|s| s.as_str().to_string()).collect();

        // Only moves out of an allowed predecessor apply; a concurrent writer that got there
        // first leaves nothing to update.
        let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2 AND status = ANY($3)")
            .bind(status.as_str())
            .bind(id.value())
            .bind(&from)
            .execute(&mut **tx.get_mut())
            .await
            .map_domain::<Order>(id)?;

        if result.rows_affected() == 0 {
            let actual: Option<String> = sqlx::query_scalar("SELECT status FROM orders WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&mut **tx.get_mut())
                .await
                .map_domain::<Order>(id)?;

            return Err(match actual {
                None => Order::not_found(id),
                Some(actual) => Order::transition_rejected(id, actual.parse()?, status),
            });
        }

        if let Some(hook) = hook {
            hook.run(&mut tx, id, status).await?;
        }

        tx.commit().await?;
        tracing::debug!(order_id = %id, status = %status, "order status updated");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let per_shard = try_join_all(self.shards.shards().iter().map(|db| async move {
            let rows = sqlx::query_as::<_, PostgresOrderListRow>(
                r#"
                SELECT o.id, o.user_id, o.status, i.sku, i.count
                FROM orders o
                LEFT JOIN order_items i ON i.order_id = o.id
                ORDER BY o.id DESC, i.position ASC, i.id ASC
                "#,
            )
            .fetch_all(db.read_pool())
            .await
            .map_domain_infra("Order.find_all")?;

            group_order_rows(rows)
        }))
        .await?;

        let mut orders: Vec<Order> = per_shard.into_iter().flatten().collect();
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(orders)
    }
}
