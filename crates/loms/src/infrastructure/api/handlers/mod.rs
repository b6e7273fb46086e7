// crates/loms/src/infrastructure/api/handlers/mod.rs

mod loms_handler;

pub use loms_handler::LomsHandler;
