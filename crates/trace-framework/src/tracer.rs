//! # Tracer
//!
//! The service behind every interception strategy: `begin` opens a frame,
//! `end`/`exception` close it and restore the caller's nesting level.
//!
//! # Architecture Note
//! The execution context here is the Tokio task. Each task owns an
//! independent current [`TraceId`] held in `tokio::task_local!` storage, so
//! concurrent chains can never corrupt each other's levels: the cell has
//! exactly one writer (the task that owns it) and travels with the task even
//! when the runtime migrates it between worker threads.
//!
//! A logical call chain is entered with [`trace_scope`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use trace_framework::{trace_scope, TaskLocalTracer, Tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tracer = Arc::new(TaskLocalTracer::new());
//!     trace_scope(async {
//!         let outer = tracer.begin("Service.request");
//!         let inner = tracer.begin("Repository.save");
//!         assert_eq!(inner.trace_id().level(), 1);
//!         tracer.end(inner);
//!         tracer.end(outer);
//!     })
//!     .await;
//! }
//! ```
//!
//! Calling `begin` outside a scope is not an error: the call is traced as
//! its own root chain and no state is retained. The tracer never fails and
//! never blocks.

use crate::context::{TraceId, TraceStatus};
use crate::event::{LogSink, TraceEvent, TraceSink};
use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Begin/end/exception service invoked by the interception strategies.
///
/// Implementations must keep stack discipline: for any chain, the level
/// after `end` or `exception` equals the level immediately before the
/// matching `begin`. Failing to restore on the exceptional path is a defect.
pub trait Tracer: Send + Sync {
    /// Opens a frame: extends the current chain (or starts a new one),
    /// records a begin event, and returns the receipt the caller must hand
    /// back to exactly one of [`end`](Tracer::end) /
    /// [`exception`](Tracer::exception).
    fn begin(&self, message: &str) -> TraceStatus;

    /// Closes a frame on the success path and restores the caller's level.
    fn end(&self, status: TraceStatus);

    /// Closes a frame on the failure path. Restores the level exactly like
    /// `end`; the error is only observed, never altered.
    fn exception(&self, status: TraceStatus, error: &dyn Display);
}

tokio::task_local! {
    // Current trace id of this task's logical call chain. `None` between
    // root calls.
    static CURRENT_TRACE: RefCell<Option<TraceId>>;
}

/// Runs `future` inside a fresh trace context: every `begin`/`end` issued
/// while it executes belongs to one logical call chain.
pub async fn trace_scope<F: Future>(future: F) -> F::Output {
    CURRENT_TRACE.scope(RefCell::new(None), future).await
}

/// The current task's trace id, if a chain is active in this scope.
pub fn current_trace_id() -> Option<TraceId> {
    CURRENT_TRACE
        .try_with(|current| current.borrow().clone())
        .ok()
        .flatten()
}

/// Production [`Tracer`] backed by task-local state.
///
/// The sink decides where events go; the default [`LogSink`] emits one log
/// line per event. A single `TaskLocalTracer` is shared by every wrapper in
/// the system - isolation comes from the task-local cell, not from the
/// tracer instance.
pub struct TaskLocalTracer {
    sink: Arc<dyn TraceSink>,
}

impl TaskLocalTracer {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    pub fn with_sink(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink }
    }

    // Advances the task's current id and returns the id for this frame.
    // Outside a scope the frame becomes its own root chain and nothing is
    // retained, keeping `begin` total.
    fn next_trace_id(&self) -> TraceId {
        CURRENT_TRACE
            .try_with(|current| {
                let mut current = current.borrow_mut();
                let next = match current.as_ref() {
                    Some(id) => id.next(),
                    None => TraceId::new(),
                };
                *current = Some(next.clone());
                next
            })
            .unwrap_or_default()
    }

    // Restores the task's current id to the frame below `released`, or
    // clears it when the chain root returns.
    fn release_trace_id(&self, released: &TraceId) {
        let _ = CURRENT_TRACE.try_with(|current| {
            let mut current = current.borrow_mut();
            if current.as_ref() != Some(released) {
                // Out-of-order release is a bug in the interception
                // strategy, not a recoverable condition. Restore from the
                // status so the chain can still unwind.
                warn!(
                    transaction_id = released.transaction_id(),
                    level = released.level(),
                    "unbalanced trace release"
                );
            }
            *current = released.previous();
        });
    }

    fn complete(&self, status: TraceStatus, error: Option<&dyn Display>) {
        let (trace_id, start, message) = status.into_parts();
        let elapsed = start.elapsed();
        let event = match error {
            None => TraceEvent::End {
                trace_id: trace_id.clone(),
                message,
                elapsed,
            },
            Some(error) => TraceEvent::Exception {
                trace_id: trace_id.clone(),
                message,
                elapsed,
                error: error.to_string(),
            },
        };
        self.sink.record(&event);
        self.release_trace_id(&trace_id);
    }
}

impl Default for TaskLocalTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer for TaskLocalTracer {
    fn begin(&self, message: &str) -> TraceStatus {
        let trace_id = self.next_trace_id();
        self.sink.record(&TraceEvent::Begin {
            trace_id: trace_id.clone(),
            message: message.to_string(),
        });
        TraceStatus::new(trace_id, message)
    }

    fn end(&self, status: TraceStatus) {
        self.complete(status, None);
    }

    fn exception(&self, status: TraceStatus, error: &dyn Display) {
        self.complete(status, Some(error));
    }
}
