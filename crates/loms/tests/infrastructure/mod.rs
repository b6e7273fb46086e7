// crates/loms/tests/infrastructure/mod.rs

mod loms_handler_it;
mod order_repository_it;
mod outbox_repository_it;
mod stock_repository_it;
