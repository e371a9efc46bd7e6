//! # Trace Framework
//!
//! Transparent call tracing: wrap a service call so that entry, exit, and
//! failure are logged with a nested call-hierarchy identifier, without the
//! wrapped logic knowing it is observed.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Context Layer** ([`TraceId`], [`TraceStatus`]) - where we are in a
//!    chain of nested calls
//! 2. **Service Layer** ([`Tracer`], [`TaskLocalTracer`]) - begin/end/exception
//!    bookkeeping per execution context
//! 3. **Interception Layer** ([`Traced`], [`AutoInstrumenter`]) - substituting
//!    instrumented wrappers for raw components
//!
//! ## The Trace Model
//!
//! Every call in one logical chain shares a `transaction_id`; nesting depth
//! is the `level`. A chain is entered with [`trace_scope`], and the emitted
//! log shows the hierarchy by indentation:
//!
//! ```text
//! -->OrderController.request
//!   -->OrderService.order_item
//!     -->OrderRepository.save
//!     <--OrderRepository.save time=102ms
//!   <--OrderService.order_item time=103ms
//! <--OrderController.request time=104ms
//! ```
//!
//! On failure the marker flips to `<X-` and the error rides along, but the
//! error itself is always re-raised to the caller unchanged - tracing is
//! purely additive, and removing it never changes success/failure behavior.
//!
//! ## Interception Strategies
//!
//! Three interchangeable ways to stand a tracing wrapper in front of a
//! target, all sharing the same contract (call the traced operation wrapped
//! by begin/end/exception, re-raise failures verbatim):
//!
//! - **Interface proxy** - a hand-written type implementing the target's
//!   capability trait, one traced method at a time. Simple, but one proxy
//!   per trait.
//! - **Concrete wrapper** - the same idea for a target with no trait
//!   surface: a wrapper exposing identical inherent methods, delegating to
//!   an internally held instance. One wrapper per concrete type.
//! - **Generic interception** ([`Traced`]) - a single reusable wrapper whose
//!   [`invoke`](Traced::invoke) drives the cycle for any operation, with the
//!   label derived from the target's type name. This is the production path
//!   and the mechanism [`AutoInstrumenter`] applies.
//!
//! The sample crate in this workspace demonstrates all three on an order
//! application.
//!
//! ## Automatic Instrumentation
//!
//! [`AutoInstrumenter`] is a construction-time hook: the composition root
//! passes every freshly built component through
//! [`post_process`](AutoInstrumenter::post_process), and components whose
//! namespace matches the selector come back wrapped in [`Traced`] bound to a
//! [`TraceAdvisor`] (a [`Pointcut`] over operation names plus the tracer to
//! apply). Everything else comes back pointer-identical.
//!
//! ## Concurrency Model
//!
//! - The tracer never spawns work and never suspends; it runs inline in
//!   whatever task invokes the traced operation
//! - Each Tokio task owns an independent trace context (task-local cell),
//!   so concurrent chains interleave freely in the log but never corrupt
//!   each other's levels
//! - Within one task, begin/end pairs follow strict stack discipline
//!
//! ## Testing
//!
//! The [`mock`] module provides [`RecordingSink`](mock::RecordingSink), an
//! in-memory event sink that lets tests assert on emitted trace events
//! deterministically instead of parsing log output.

pub mod advice;
pub mod context;
pub mod event;
pub mod instrument;
pub mod interceptor;
pub mod mock;
pub mod tracer;
pub mod tracing;

// Re-export core types for convenience
pub use advice::{Pointcut, TraceAdvisor};
pub use context::{TraceId, TraceStatus};
pub use event::{LogSink, TraceEvent, TraceSink};
pub use instrument::AutoInstrumenter;
pub use interceptor::{BoxFuture, Traced};
pub use tracer::{current_trace_id, trace_scope, TaskLocalTracer, Tracer};
pub use crate::tracing::setup_tracing;
