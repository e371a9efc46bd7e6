//! # Advisor
//!
//! The matching rule bound to a generic interception wrapper: a [`Pointcut`]
//! decides *which* operations get traced, a [`TraceAdvisor`] pairs that
//! predicate with the [`Tracer`] to apply. Operations the pointcut rejects
//! are delegated untouched.

use crate::tracer::Tracer;
use std::sync::Arc;

/// Predicate over operation names.
///
/// Patterns are matched against the bare method name: `"save"` exactly,
/// `"order*"` as a prefix, `"*_item"` as a suffix. An empty pattern list
/// matches nothing; [`Pointcut::any`] matches everything.
#[derive(Debug, Clone)]
pub struct Pointcut {
    patterns: Vec<String>,
}

impl Pointcut {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Matches every operation.
    pub fn any() -> Self {
        Self::new(["*"])
    }

    pub fn matches(&self, method: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            if pattern == "*" {
                true
            } else if let Some(prefix) = pattern.strip_suffix('*') {
                method.starts_with(prefix)
            } else if let Some(suffix) = pattern.strip_prefix('*') {
                method.ends_with(suffix)
            } else {
                method == pattern
            }
        })
    }
}

/// A matching rule plus the tracing behavior to apply where it matches.
#[derive(Clone)]
pub struct TraceAdvisor {
    pointcut: Pointcut,
    tracer: Arc<dyn Tracer>,
}

impl TraceAdvisor {
    pub fn new(pointcut: Pointcut, tracer: Arc<dyn Tracer>) -> Self {
        Self { pointcut, tracer }
    }

    /// Advisor tracing every operation of the targets it is bound to.
    pub fn for_all(tracer: Arc<dyn Tracer>) -> Self {
        Self::new(Pointcut::any(), tracer)
    }

    pub fn applies_to(&self, method: &str) -> bool {
        self.pointcut.matches(method)
    }

    pub fn tracer(&self) -> &dyn Tracer {
        self.tracer.as_ref()
    }
}
