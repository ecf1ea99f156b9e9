//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens a scope per request; anything running inside the
//! handler future (error rendering, db error mapping, logging) can read the
//! current trace id without threading it through every call.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Fallback used outside a request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Get the trace_id for the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
