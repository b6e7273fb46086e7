// crates/loms/src/domain/repositories/mod.rs

mod order_repository;
mod stock_repository;

pub use order_repository::{OrderRepository, OrderWriteHook};
pub use stock_repository::StockRepository;

#[cfg(test)]
mod order_repository_stub;
#[cfg(test)]
mod stock_repository_stub;

#[cfg(test)]
pub use order_repository_stub::OrderRepositoryStub;
#[cfg(test)]
pub use stock_repository_stub::StockRepositoryStub;
