// crates/shared-kernel/src/infrastructure/postgres/sharding/shard_manager.rs

use std::io::Cursor;
use crate::errors::{DomainError, Result};

pub type ShardIndex = usize;
pub type ShardFn = Box<dyn Fn(&str) -> ShardIndex + Send + Sync>;

/// Ids are allocated as `seq * SHARD_ID_SPACE + shard`, so the shard is recoverable from the id.
pub const SHARD_ID_SPACE: i64 = 1000;

/// `murmur3_32(key, seed 0) mod shards`.
pub fn murmur3_shard_fn(shards: usize) -> ShardFn {
    let shards = shards.max(1) as u32;
    Box::new(move |key: &str| {
        let hash = murmur3::murmur3_32(&mut Cursor::new(key.as_bytes()), 0).unwrap_or_default();
        (hash % shards) as ShardIndex
    })
}

/// Fixed list of shards plus the routing function for new keys.
/// Built once at startup; never resized.
pub struct ShardManager<P> {
    shard_fn: ShardFn,
    shards: Vec<P>,
}

impl<P> ShardManager<P> {
    pub fn new(shard_fn: ShardFn, shards: Vec<P>) -> Self {
        Self { shard_fn, shards }
    }

    /// Murmur3 routing over `shards`.
    pub fn with_murmur3(shards: Vec<P>) -> Self {
        Self::new(murmur3_shard_fn(shards.len()), shards)
    }

    pub fn shard_index(&self, key: &str) -> ShardIndex {
        (self.shard_fn)(key)
    }

    pub fn shard_index_from_id(&self, id: i64) -> ShardIndex {
        id.rem_euclid(SHARD_ID_SPACE) as ShardIndex
    }

    pub fn pick(&self, index: ShardIndex) -> Result<&P> {
        self.shards.get(index).ok_or(DomainError::ShardOutOfRange {
            index,
            shards: self.shards.len(),
        })
    }

    pub fn shards(&self) -> &[P] {
        &self.shards
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }
}
