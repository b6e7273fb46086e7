// crates/loms/src/infrastructure/mod.rs

pub mod api;
pub mod bootstrap;
pub mod outbox;
pub mod postgres;
