//! # Trace Context
//!
//! Pure data types identifying one logical call chain.
//!
//! # Architecture Note
//! A [`TraceId`] names *where we are* in a chain of nested calls: every call
//! on the same logical execution shares one `transaction_id`, and `level`
//! counts how deep the current frame is nested. A [`TraceStatus`] is the
//! receipt handed out by [`Tracer::begin`](crate::Tracer::begin) for a single
//! intercepted call; it is consumed **by value** by `end` or `exception`, so
//! the type system guarantees each begin is closed at most once.

use std::time::Instant;
use uuid::Uuid;

/// Identifies one logical call chain and the current nesting depth.
///
/// Immutable value type. All ids produced by [`TraceId::next`] share the
/// originating `transaction_id`; only `level` changes, by exactly one per
/// nested call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId {
    transaction_id: String,
    level: usize,
}

impl TraceId {
    /// Starts a new chain: fresh transaction id, level 0.
    pub fn new() -> Self {
        Self {
            transaction_id: new_transaction_id(),
            level: 0,
        }
    }

    /// The id for a call nested one level below this one.
    pub fn next(&self) -> Self {
        Self {
            transaction_id: self.transaction_id.clone(),
            level: self.level + 1,
        }
    }

    /// The id of the caller's frame, or `None` when this is the chain root.
    pub fn previous(&self) -> Option<Self> {
        if self.level == 0 {
            return None;
        }
        Some(Self {
            transaction_id: self.transaction_id.clone(),
            level: self.level - 1,
        })
    }

    /// Whether this id sits at the root of its chain.
    pub fn is_first_level(&self) -> bool {
        self.level == 0
    }

    /// Opaque identifier shared by every call in the chain.
    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// Nesting depth, starting at 0 for the chain root.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

// Short ids keep log lines readable; 8 hex chars of a v4 uuid are plenty to
// tell concurrent chains apart.
fn new_transaction_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Receipt for one intercepted call, created by `begin` and consumed exactly
/// once by the matching `end` or `exception`.
#[derive(Debug)]
pub struct TraceStatus {
    trace_id: TraceId,
    start: Instant,
    message: String,
}

impl TraceStatus {
    pub fn new(trace_id: TraceId, message: impl Into<String>) -> Self {
        Self {
            trace_id,
            start: Instant::now(),
            message: message.into(),
        }
    }

    /// The [`TraceId`] captured at entry.
    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    /// Entry timestamp, used to compute elapsed wall time at exit.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Human-readable operation label, e.g. `"OrderService.order_item"`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_parts(self) -> (TraceId, Instant, String) {
        (self.trace_id, self.start, self.message)
    }
}
