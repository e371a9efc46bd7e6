//! # Generic Interception
//!
//! A single reusable wrapper, [`Traced<T>`], that applies
//! begin/delegate/end-or-exception around *any* operation of *any* target,
//! without per-operation tracing code.
//!
//! # Architecture Note
//! Runtime reflection is replaced by a closure describing the operation to
//! invoke: the wrapper derives the label from the target's short type name
//! plus the operation name, consults its advisor's pointcut, and drives the
//! tracer around the delegated call. Transparency toward callers comes from
//! a generic trait impl per capability surface,
//!
//! ```rust
//! use async_trait::async_trait;
//! use trace_framework::Traced;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("greeting failed")]
//! struct GreetError;
//!
//! #[async_trait]
//! trait Greeter: Send + Sync {
//!     async fn greet(&self, name: &str) -> Result<String, GreetError>;
//! }
//!
//! #[async_trait]
//! impl<T: Greeter + ?Sized> Greeter for Traced<T> {
//!     async fn greet(&self, name: &str) -> Result<String, GreetError> {
//!         self.invoke("greet", |target| target.greet(name)).await
//!     }
//! }
//! ```
//!
//! whose method bodies are one [`Traced::invoke`] call each - the wrapper,
//! not the capability impl, owns the interception logic. This is the
//! mechanism [`AutoInstrumenter`](crate::AutoInstrumenter) applies, since it
//! must work uniformly across target types discovered at construction time.

use crate::advice::TraceAdvisor;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future as produced by `async-trait` methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Transparent tracing wrapper around a shared target.
///
/// Holds the real target and the [`TraceAdvisor`] deciding which operations
/// to trace. The wrapped logic never learns it is being observed: results
/// and errors pass through unchanged.
pub struct Traced<T: ?Sized> {
    target: Arc<T>,
    advisor: TraceAdvisor,
}

impl<T: ?Sized> Traced<T> {
    pub fn new(target: Arc<T>, advisor: TraceAdvisor) -> Self {
        Self { target, advisor }
    }

    /// Convenience for the common `Arc<Traced<…>>` shape used when the
    /// wrapper substitutes for the target behind a capability trait.
    pub fn wrap(target: Arc<T>, advisor: TraceAdvisor) -> Arc<Self> {
        Arc::new(Self::new(target, advisor))
    }

    /// The wrapped target. Calls through this reference are not traced.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Invokes one operation on the target through the tracer.
    ///
    /// `method` is the bare operation name; the emitted label is
    /// `"{ShortTypeName}.{method}"`. If the advisor's pointcut rejects the
    /// method, the call is pure delegation. On failure the error is
    /// reported via `exception` and returned to the caller verbatim.
    pub async fn invoke<'a, R, E, F>(&'a self, method: &str, call: F) -> Result<R, E>
    where
        F: FnOnce(&'a T) -> BoxFuture<'a, Result<R, E>>,
        E: Display,
    {
        if !self.advisor.applies_to(method) {
            return call(&self.target).await;
        }

        let label = format!("{}.{}", short_type_name::<T>(), method);
        let tracer = self.advisor.tracer();
        let status = tracer.begin(&label);
        match call(&self.target).await {
            Ok(value) => {
                tracer.end(status);
                Ok(value)
            }
            Err(error) => {
                tracer.exception(status, &error);
                Err(error)
            }
        }
    }
}

// "OrderRepository" instead of "dyn trace_sample::app::OrderRepository".
fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
