// crates/loms/src/infrastructure/bootstrap/context.rs

use std::sync::Arc;
use sqlx::PgPool;
use shared_kernel::domain::repositories::OutboxRepository;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::postgres::balancer::PgBalancer;
use shared_kernel::infrastructure::postgres::factories::{PostgresConfig, PostgresContext};
use shared_kernel::infrastructure::postgres::repositories::PostgresOutboxRepository;
use shared_kernel::infrastructure::postgres::sharding::ShardManager;

use crate::domain::repositories::{OrderRepository, StockRepository};
use crate::infrastructure::api::LomsHandler;
use crate::infrastructure::bootstrap::LomsConfig;
use crate::infrastructure::outbox::OrderOutboxRepository;
use crate::infrastructure::postgres::repositories::{PostgresOrderRepository, PostgresStockRepository};

/// Wired service: pools, shard table, repositories and the RPC handler.
pub struct LomsContext {
    shards: Arc<ShardManager<PgBalancer>>,
    order_repo: Arc<dyn OrderRepository>,
    stock_repo: Arc<dyn StockRepository>,
    handler: Arc<LomsHandler>,
}

impl LomsContext {
    pub async fn connect(config: &LomsConfig) -> AppResult<Self> {
        let master = connect_pool(&config.master_url, config.postgres).await?;
        let replica = connect_pool(&config.replica_url, config.postgres).await?;
        let stock_db = PgBalancer::new(master.clone(), replica.clone());

        let mut shards = Vec::with_capacity(config.shard_urls.len());
        for url in &config.shard_urls {
            if *url == config.master_url {
                shards.push(stock_db.clone());
            } else {
                shards.push(PgBalancer::single(connect_pool(url, config.postgres).await?));
            }
        }

        tracing::info!(shards = shards.len(), "database pools ready");
        Ok(Self::from_balancers(stock_db, shards, &config.kafka.order_events_topic))
    }

    /// Wires repositories over already-open pools. `shards[i]` serves shard index `i`.
    pub fn from_balancers(stock_db: PgBalancer, shards: Vec<PgBalancer>, topic: &str) -> Self {
        let shards = Arc::new(ShardManager::with_murmur3(shards));

        // Event rows always go through the order write's transaction, which already sits on the
        // right shard, so this pool is only used outside a transaction.
        let outbox: Arc<dyn OutboxRepository> = Arc::new(PostgresOutboxRepository::new(stock_db.primary().clone()));

        let orders: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(shards.clone()));
        let order_repo: Arc<dyn OrderRepository> = Arc::new(OrderOutboxRepository::new(orders, outbox, topic));
        let stock_repo: Arc<dyn StockRepository> = Arc::new(PostgresStockRepository::new(stock_db));

        let handler = Arc::new(LomsHandler::new(order_repo.clone(), stock_repo.clone()));
        Self {
            shards,
            order_repo,
            stock_repo,
            handler,
        }
    }

    pub fn handler(&self) -> Arc<LomsHandler> {
        self.handler.clone()
    }

    pub fn order_repo(&self) -> Arc<dyn OrderRepository> {
        self.order_repo.clone()
    }

    pub fn stock_repo(&self) -> Arc<dyn StockRepository> {
        self.stock_repo.clone()
    }

    /// One outbox per shard primary, in shard order.
    pub fn outboxes(&self) -> Vec<Arc<dyn OutboxRepository>> {
        self.shards
            .shards()
            .iter()
            .map(|db| Arc::new(PostgresOutboxRepository::new(db.primary().clone())) as Arc<dyn OutboxRepository>)
            .collect()
    }
}

async fn connect_pool(url: &str, config: PostgresConfig) -> AppResult<PgPool> {
    let ctx = PostgresContext::builder().with_url(url).with_config(config).build().await?;
    Ok(ctx.pool())
}
