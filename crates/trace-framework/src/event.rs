//! # Trace Events & Sinks
//!
//! The observable output of the tracer is a stream of [`TraceEvent`]s, one
//! per begin/end/exception. Where an event goes is a [`TraceSink`] concern:
//! the production [`LogSink`] renders each event as a line through the
//! `tracing` crate, while tests plug in a
//! [`RecordingSink`](crate::mock::RecordingSink) and assert on the events
//! themselves instead of parsing log text.

use crate::context::TraceId;
use std::time::Duration;
use tracing::{info, warn};

/// One emitted trace record.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// Control entered an intercepted operation.
    Begin { trace_id: TraceId, message: String },
    /// The operation returned successfully.
    End {
        trace_id: TraceId,
        message: String,
        elapsed: Duration,
    },
    /// The operation failed; the error is re-raised to the caller after
    /// this event is recorded.
    Exception {
        trace_id: TraceId,
        message: String,
        elapsed: Duration,
        error: String,
    },
}

impl TraceEvent {
    pub fn trace_id(&self) -> &TraceId {
        match self {
            TraceEvent::Begin { trace_id, .. }
            | TraceEvent::End { trace_id, .. }
            | TraceEvent::Exception { trace_id, .. } => trace_id,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TraceEvent::Begin { message, .. }
            | TraceEvent::End { message, .. }
            | TraceEvent::Exception { message, .. } => message,
        }
    }

    /// Renders the line format: indentation of width `2 * level`, a marker
    /// (`-->` begin, `<--` end, `<X-` exception), the label, and for
    /// end/exception the elapsed milliseconds (plus the error message on
    /// the exception path).
    pub fn render(&self) -> String {
        match self {
            TraceEvent::Begin { trace_id, message } => {
                format!("{}-->{}", indent(trace_id.level()), message)
            }
            TraceEvent::End {
                trace_id,
                message,
                elapsed,
            } => format!(
                "{}<--{} time={}ms",
                indent(trace_id.level()),
                message,
                elapsed.as_millis()
            ),
            TraceEvent::Exception {
                trace_id,
                message,
                elapsed,
                error,
            } => format!(
                "{}<X-{} time={}ms err={}",
                indent(trace_id.level()),
                message,
                elapsed.as_millis(),
                error
            ),
        }
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Destination for trace events.
pub trait TraceSink: Send + Sync {
    fn record(&self, event: &TraceEvent);
}

/// Default sink: one log line per event, with the transaction id attached
/// as a structured field so concurrent chains can be told apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&self, event: &TraceEvent) {
        let transaction_id = event.trace_id().transaction_id();
        match event {
            TraceEvent::Begin { .. } | TraceEvent::End { .. } => {
                info!(transaction_id, "{}", event.render())
            }
            TraceEvent::Exception { .. } => warn!(transaction_id, "{}", event.render()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_indents_by_level() {
        let root = TraceId::new();
        let child = root.next();

        let begin = TraceEvent::Begin {
            trace_id: child.clone(),
            message: "OrderService.order_item".to_string(),
        };
        assert_eq!(begin.render(), "  -->OrderService.order_item");

        let end = TraceEvent::End {
            trace_id: root.clone(),
            message: "OrderController.request".to_string(),
            elapsed: Duration::from_millis(12),
        };
        assert_eq!(end.render(), "<--OrderController.request time=12ms");

        let failure = TraceEvent::Exception {
            trace_id: child,
            message: "OrderRepository.save".to_string(),
            elapsed: Duration::from_millis(3),
            error: "invalid item id: ex".to_string(),
        };
        assert_eq!(
            failure.render(),
            "  <X-OrderRepository.save time=3ms err=invalid item id: ex"
        );
    }
}
