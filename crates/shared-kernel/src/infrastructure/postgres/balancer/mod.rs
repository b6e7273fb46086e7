// crates/shared-kernel/src/infrastructure/postgres/balancer/mod.rs

mod pg_balancer;

pub use pg_balancer::{is_sql_write, PgBalancer};
