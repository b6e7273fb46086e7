// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod balancer;
pub mod factories;
pub mod mappers;
pub mod repositories;
pub mod rows;
pub mod sharding;
pub mod transactions;

#[cfg(feature = "test-utils")]
pub mod utils;
