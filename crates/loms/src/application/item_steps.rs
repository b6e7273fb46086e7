// crates/loms/src/application/item_steps.rs

use std::future::Future;
use shared_kernel::errors::{DomainError, Result, ResultExt};
use crate::domain::entities::OrderItem;

/// Applies `step` to every item in order and stops at the first failure.
/// The error names the failing item and every item after it; applied steps stay applied.
pub(crate) async fn for_each_item<F, Fut>(items: &[OrderItem], operation: &'static str, mut step: F) -> Result<()>
where
    F: FnMut(OrderItem) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    for (i, item) in items.iter().enumerate() {
        if let Err(err) = step(*item).await.with_operation(operation) {
            return Err(DomainError::Incomplete {
                source: Box::new(err),
                remaining: items[i..].iter().map(ToString::to_string).collect(),
            });
        }
    }
    Ok(())
}
