//! Transparency impls for generic interception.
//!
//! One impl per capability trait makes [`Traced<T>`] a drop-in substitute
//! for any implementer of that trait; each method body is a single
//! [`invoke`](Traced::invoke) call, so the interception logic lives in the
//! framework, not here. The advisor's pointcut decides per operation name
//! whether the call is traced or purely delegated (which is why `no_log`
//! needs no special handling).

use crate::app::{OrderController, OrderError, OrderRepository, OrderService};
use async_trait::async_trait;
use trace_framework::Traced;

#[async_trait]
impl<T: OrderController + ?Sized> OrderController for Traced<T> {
    async fn request(&self, item_id: &str) -> Result<String, OrderError> {
        self.invoke("request", |target| target.request(item_id)).await
    }

    async fn no_log(&self) -> Result<String, OrderError> {
        self.invoke("no_log", |target| target.no_log()).await
    }
}

#[async_trait]
impl<T: OrderService + ?Sized> OrderService for Traced<T> {
    async fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.invoke("order_item", |target| target.order_item(item_id))
            .await
    }
}

#[async_trait]
impl<T: OrderRepository + ?Sized> OrderRepository for Traced<T> {
    async fn save(&self, item_id: &str) -> Result<(), OrderError> {
        self.invoke("save", |target| target.save(item_id)).await
    }
}
