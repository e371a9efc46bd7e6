//! # Automatic Instrumentation
//!
//! Construction-time hook that decides, per freshly built component, whether
//! to hand consumers the raw object or a [`Traced`] wrapper. The composition
//! root calls [`AutoInstrumenter::post_process`] once for every component it
//! creates and uses the returned value in place of the original - an
//! explicit factory-decorator step rather than an implicit framework hook.
//!
//! ```rust,ignore
//! let repository: Arc<dyn OrderRepository> = Arc::new(OrderRepositoryImpl::new());
//! let repository = instrumenter.post_process(repository, app::NAMESPACE, |wrapped| {
//!     wrapped as Arc<dyn OrderRepository>
//! });
//! ```
//!
//! Components outside the selector namespace come back untouched - same
//! `Arc`, no allocation, no log line - so the hook is safe to run for every
//! component in the system, traced or not.

use crate::advice::TraceAdvisor;
use crate::interceptor::Traced;
use std::sync::Arc;
use tracing::debug;

/// Wraps matching components in generic interception at construction time.
pub struct AutoInstrumenter {
    base_namespace: String,
    advisor: TraceAdvisor,
}

impl AutoInstrumenter {
    /// `base_namespace` selects candidates by prefix, e.g. a module path
    /// such as `"trace_sample::app"`.
    pub fn new(base_namespace: impl Into<String>, advisor: TraceAdvisor) -> Self {
        Self {
            base_namespace: base_namespace.into(),
            advisor,
        }
    }

    /// Whether components declared in `namespace` are selected.
    pub fn applies_to(&self, namespace: &str) -> bool {
        namespace.starts_with(&self.base_namespace)
    }

    /// Post-construction hook.
    ///
    /// Returns the input `Arc` pointer-identical when `namespace` falls
    /// outside the selector. Otherwise substitutes a [`Traced`] wrapper
    /// bound to this instrumenter's advisor; `unsize` is the per-capability
    /// coercion back to the trait object the callers hold (Rust cannot
    /// perform it generically).
    pub fn post_process<T, F>(&self, component: Arc<T>, namespace: &str, unsize: F) -> Arc<T>
    where
        T: ?Sized + Send + Sync,
        F: FnOnce(Arc<Traced<T>>) -> Arc<T>,
    {
        if !self.applies_to(namespace) {
            return component;
        }
        debug!(namespace, "instrumenting component");
        unsize(Traced::wrap(component, self.advisor.clone()))
    }
}
