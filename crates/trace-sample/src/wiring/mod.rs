//! # Composition Roots
//!
//! The wiring layer is the only place that knows both the raw components
//! and the interception strategies. Consumers receive the finished
//! `Arc<dyn OrderController>` and cannot tell whether (or how) it is
//! instrumented.
//!
//! # Architecture Note
//! Automatic instrumentation is an explicit factory-decorator step here:
//! every component the root constructs is passed through
//! [`AutoInstrumenter::post_process`] exactly once, right after
//! construction and before anything else holds a reference. The
//! instrumenter decides by namespace; the root supplies only the
//! per-capability coercion closure.

use crate::app::{
    self, ConcreteLogic, OrderController, OrderControllerImpl, OrderRepository,
    OrderRepositoryImpl, OrderService, OrderServiceImpl,
};
use crate::proxies::{
    ConcreteLogicTraceProxy, OrderControllerTraceProxy, OrderRepositoryTraceProxy,
    OrderServiceTraceProxy,
};
use std::sync::Arc;
use std::time::Duration;
use trace_framework::{AutoInstrumenter, Tracer};

/// Hand-wired interface-proxy chain: every layer is wrapped explicitly in
/// its own proxy type.
pub fn interface_proxies(
    tracer: Arc<dyn Tracer>,
    repository_latency: Duration,
) -> Arc<dyn OrderController> {
    let repository: Arc<dyn OrderRepository> =
        Arc::new(OrderRepositoryImpl::with_latency(repository_latency));
    let repository: Arc<dyn OrderRepository> =
        Arc::new(OrderRepositoryTraceProxy::new(repository, tracer.clone()));

    let service: Arc<dyn OrderService> = Arc::new(OrderServiceImpl::new(repository));
    let service: Arc<dyn OrderService> =
        Arc::new(OrderServiceTraceProxy::new(service, tracer.clone()));

    let controller: Arc<dyn OrderController> = Arc::new(OrderControllerImpl::new(service));
    Arc::new(OrderControllerTraceProxy::new(controller, tracer))
}

/// Concrete-wrapper strategy: callers own the wrapper type in place of
/// [`ConcreteLogic`].
pub fn concrete_proxy(tracer: Arc<dyn Tracer>) -> ConcreteLogicTraceProxy {
    ConcreteLogicTraceProxy::new(ConcreteLogic::new(), tracer)
}

/// Auto-instrumented chain: raw components only, each run through the
/// post-construction hook with its declared namespace.
pub fn auto_instrumented(
    instrumenter: &AutoInstrumenter,
    repository_latency: Duration,
) -> Arc<dyn OrderController> {
    let repository: Arc<dyn OrderRepository> =
        Arc::new(OrderRepositoryImpl::with_latency(repository_latency));
    let repository = instrumenter.post_process(repository, app::NAMESPACE, |wrapped| {
        wrapped as Arc<dyn OrderRepository>
    });

    let service: Arc<dyn OrderService> = Arc::new(OrderServiceImpl::new(repository));
    let service = instrumenter.post_process(service, app::NAMESPACE, |wrapped| {
        wrapped as Arc<dyn OrderService>
    });

    let controller: Arc<dyn OrderController> = Arc::new(OrderControllerImpl::new(service));
    instrumenter.post_process(controller, app::NAMESPACE, |wrapped| {
        wrapped as Arc<dyn OrderController>
    })
}
