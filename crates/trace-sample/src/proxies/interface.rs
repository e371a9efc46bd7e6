//! Manual interface proxies.
//!
//! Each proxy implements the same capability trait as its target, holds the
//! real component plus the tracer, and spells the
//! begin/delegate/end-or-exception cycle out per method. Verbose but
//! obvious; the generic strategy exists because this does not scale past a
//! handful of traits.

use crate::app::{OrderController, OrderError, OrderRepository, OrderService};
use async_trait::async_trait;
use std::sync::Arc;
use trace_framework::Tracer;

pub struct OrderControllerTraceProxy {
    target: Arc<dyn OrderController>,
    tracer: Arc<dyn Tracer>,
}

impl OrderControllerTraceProxy {
    pub fn new(target: Arc<dyn OrderController>, tracer: Arc<dyn Tracer>) -> Self {
        Self { target, tracer }
    }
}

#[async_trait]
impl OrderController for OrderControllerTraceProxy {
    async fn request(&self, item_id: &str) -> Result<String, OrderError> {
        let status = self.tracer.begin("OrderController.request");
        match self.target.request(item_id).await {
            Ok(value) => {
                self.tracer.end(status);
                Ok(value)
            }
            Err(error) => {
                self.tracer.exception(status, &error);
                Err(error)
            }
        }
    }

    // Delegates without tracing.
    async fn no_log(&self) -> Result<String, OrderError> {
        self.target.no_log().await
    }
}

pub struct OrderServiceTraceProxy {
    target: Arc<dyn OrderService>,
    tracer: Arc<dyn Tracer>,
}

impl OrderServiceTraceProxy {
    pub fn new(target: Arc<dyn OrderService>, tracer: Arc<dyn Tracer>) -> Self {
        Self { target, tracer }
    }
}

#[async_trait]
impl OrderService for OrderServiceTraceProxy {
    async fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        let status = self.tracer.begin("OrderService.order_item");
        match self.target.order_item(item_id).await {
            Ok(value) => {
                self.tracer.end(status);
                Ok(value)
            }
            Err(error) => {
                self.tracer.exception(status, &error);
                Err(error)
            }
        }
    }
}

pub struct OrderRepositoryTraceProxy {
    target: Arc<dyn OrderRepository>,
    tracer: Arc<dyn Tracer>,
}

impl OrderRepositoryTraceProxy {
    pub fn new(target: Arc<dyn OrderRepository>, tracer: Arc<dyn Tracer>) -> Self {
        Self { target, tracer }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryTraceProxy {
    async fn save(&self, item_id: &str) -> Result<(), OrderError> {
        let status = self.tracer.begin("OrderRepository.save");
        match self.target.save(item_id).await {
            Ok(value) => {
                self.tracer.end(status);
                Ok(value)
            }
            Err(error) => {
                self.tracer.exception(status, &error);
                Err(error)
            }
        }
    }
}
