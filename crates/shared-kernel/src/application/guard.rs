// crates/shared-kernel/src/application/guard.rs

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use futures::FutureExt;
use tracing::Instrument;
use crate::application::{CallContext, Validate};
use crate::errors::{AppError, AppResult, Result};

/// Runs one inbound call at the boundary.
///
/// The request is validated first. The handler then races the context: cancellation or an
/// expired deadline drops the handler future, which aborts in-flight queries and rolls back
/// any open transaction. A panic inside the handler is logged and reported as an internal
/// error instead of unwinding into the caller.
///
/// The handler runs inside an `rpc` span; its id is the trace id stamped on events the call emits.
pub async fn guard<Req, Resp, F, Fut>(
    operation: &'static str,
    ctx: &CallContext,
    request: Req,
    handler: F,
) -> AppResult<Resp>
where
    Req: Validate,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Resp>>,
{
    if let Err(e) = request.validate() {
        tracing::debug!(operation, error = %e, "request rejected");
        return Err(AppError::from(e));
    }

    let span = tracing::info_span!("rpc", operation);
    let work = AssertUnwindSafe(handler(request).instrument(span)).catch_unwind();

    tokio::select! {
        biased;
        cancelled = ctx.done() => {
            tracing::warn!(operation, "{}", cancelled);
            Err(AppError::from(cancelled))
        }
        outcome = work => match outcome {
            Ok(result) => result.map_err(|e| {
                tracing::debug!(operation, error = %e, kind = ?e.kind(), "call failed");
                AppError::from(e)
            }),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(operation, panic = %message, "handler panicked");
                Err(AppError::internal(format!("{operation}: internal error")))
            }
        },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
