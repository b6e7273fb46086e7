// crates/loms/src/infrastructure/api/mod.rs

pub mod dto;
pub mod handlers;
pub mod mappers;

pub use handlers::LomsHandler;
