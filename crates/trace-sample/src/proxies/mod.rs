//! # Interception Strategies
//!
//! Three interchangeable ways to put the tracer between callers and the
//! order components. All three share one contract: call the traced
//! operation wrapped by begin/end/exception, return values untouched,
//! re-raise errors verbatim.
//!
//! - [`interface`] - hand-written proxies implementing the capability
//!   traits; explicit per-method tracing code
//! - [`concrete`] - hand-written wrapper mirroring the inherent surface of
//!   a trait-less concrete type
//! - [`generic`] - the transparent
//!   [`Traced`](trace_framework::Traced) impls; one line per operation,
//!   label derived from the type, pointcut-aware. Production path, and what
//!   [`AutoInstrumenter`](trace_framework::AutoInstrumenter) applies.

pub mod concrete;
pub mod generic;
pub mod interface;

pub use concrete::ConcreteLogicTraceProxy;
pub use interface::{OrderControllerTraceProxy, OrderRepositoryTraceProxy, OrderServiceTraceProxy};
