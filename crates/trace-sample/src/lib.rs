//! # Trace Sample
//!
//! Sample order application demonstrating the three interception strategies
//! of [`trace_framework`] and its automatic instrumentation.
//!
//! - [`app`] - the business objects being traced (tracing-unaware)
//! - [`proxies`] - interface proxies, a concrete wrapper, and the generic
//!   [`Traced`](trace_framework::Traced) transparency impls
//! - [`wiring`] - composition roots that assemble traced chains

pub mod app;
pub mod proxies;
pub mod wiring;
