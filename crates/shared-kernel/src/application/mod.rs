// crates/shared-kernel/src/application/mod.rs

mod context;
mod guard;
mod validate;

pub mod ports;

pub use context::CallContext;
pub use guard::guard;
pub use validate::Validate;
