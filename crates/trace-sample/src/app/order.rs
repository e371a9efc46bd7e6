//! Controller, service, and repository of the order flow.
//!
//! Each layer depends on the next through its capability trait only, so an
//! interception strategy can substitute a traced wrapper anywhere in the
//! chain without the neighbors noticing.

use crate::app::OrderError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[async_trait]
pub trait OrderController: Send + Sync {
    /// Entry point of the flow; returns `"ok"` when the order was placed.
    async fn request(&self, item_id: &str) -> Result<String, OrderError>;

    /// Health-check style operation, deliberately outside every trace
    /// pointcut used in this sample.
    async fn no_log(&self) -> Result<String, OrderError>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn order_item(&self, item_id: &str) -> Result<(), OrderError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, item_id: &str) -> Result<(), OrderError>;
}

pub struct OrderControllerImpl {
    service: Arc<dyn OrderService>,
}

impl OrderControllerImpl {
    pub fn new(service: Arc<dyn OrderService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl OrderController for OrderControllerImpl {
    async fn request(&self, item_id: &str) -> Result<String, OrderError> {
        self.service.order_item(item_id).await?;
        Ok("ok".to_string())
    }

    async fn no_log(&self) -> Result<String, OrderError> {
        Ok("ok".to_string())
    }
}

pub struct OrderServiceImpl {
    repository: Arc<dyn OrderRepository>,
}

impl OrderServiceImpl {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.repository.save(item_id).await
    }
}

/// In-memory stand-in for storage. The configurable latency makes elapsed
/// times visible in the demo output; tests use [`Duration::ZERO`].
pub struct OrderRepositoryImpl {
    latency: Duration,
}

impl OrderRepositoryImpl {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(100))
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for OrderRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryImpl {
    async fn save(&self, item_id: &str) -> Result<(), OrderError> {
        if item_id == "ex" {
            return Err(OrderError::InvalidItem(item_id.to_string()));
        }
        sleep(self.latency).await;
        Ok(())
    }
}
