// crates/shared-kernel/src/domain/entities/mod.rs

mod entity;

pub use entity::EntityMetadata;
