// crates/shared-kernel/src/infrastructure/postgres/sharding/mod.rs

mod shard_manager;

pub use shard_manager::{murmur3_shard_fn, ShardFn, ShardIndex, ShardManager, SHARD_ID_SPACE};
