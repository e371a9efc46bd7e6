//! # Test Sink
//!
//! Deterministic in-memory [`TraceSink`] for tests. Instead of scraping log
//! output, a test constructs a [`TaskLocalTracer`](crate::TaskLocalTracer)
//! over a [`RecordingSink`], runs the code under test, and asserts on the
//! captured [`TraceEvent`]s directly.
//!
//! ```rust
//! use std::sync::Arc;
//! use trace_framework::mock::RecordingSink;
//! use trace_framework::{trace_scope, TaskLocalTracer, Tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sink = RecordingSink::new();
//!     let tracer = TaskLocalTracer::with_sink(Arc::new(sink.clone()));
//!
//!     trace_scope(async {
//!         let status = tracer.begin("Service.request");
//!         tracer.end(status);
//!     })
//!     .await;
//!
//!     let events = sink.events();
//!     assert_eq!(events.len(), 2);
//! }
//! ```

use crate::context::TraceId;
use crate::event::{TraceEvent, TraceSink};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Sink that stores every recorded event for later inspection.
///
/// Cheap to clone; all clones share one event buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<TraceEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events grouped by transaction id, preserving per-chain order.
    /// Useful for concurrency tests where chains interleave freely.
    pub fn events_by_transaction(&self) -> BTreeMap<String, Vec<TraceEvent>> {
        let mut grouped: BTreeMap<String, Vec<TraceEvent>> = BTreeMap::new();
        for event in self.events.lock().unwrap().iter() {
            grouped
                .entry(event.trace_id().transaction_id().to_string())
                .or_default()
                .push(event.clone());
        }
        grouped
    }

    /// Begin events only, in emission order.
    pub fn begins(&self) -> Vec<TraceId> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Begin { trace_id, .. } => Some(trace_id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Discards everything recorded so far.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl TraceSink for RecordingSink {
    fn record(&self, event: &TraceEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
