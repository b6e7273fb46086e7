// crates/loms/src/domain/events/mod.rs

mod order_event;

pub use order_event::{EventHeaders, OrderEvent, TRACE_ID_HEADER};
