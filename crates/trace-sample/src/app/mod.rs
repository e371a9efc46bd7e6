//! # Order Application
//!
//! The business objects being traced. Nothing in this module knows about
//! tracing: controllers, services, and repositories expose plain capability
//! traits and plain errors, and get instrumented from the outside by the
//! wiring layer.
//!
//! ## Structure
//!
//! - [`order`] - the three-layer order flow behind capability traits
//!   ([`OrderController`] -> [`OrderService`] -> [`OrderRepository`])
//! - [`concrete`] - a component with no trait surface, used by the
//!   concrete-wrapper interception strategy
//!
//! The repository treats the item id `"ex"` as a poison value and fails,
//! which is how the sample exercises the failure path end to end.

pub mod concrete;
pub mod order;

pub use concrete::ConcreteLogic;
pub use order::{
    OrderController, OrderControllerImpl, OrderRepository, OrderRepositoryImpl, OrderService,
    OrderServiceImpl,
};

/// Namespace the auto-instrumenter selects on; everything constructed from
/// this module tree matches.
pub const NAMESPACE: &str = module_path!();

/// Errors raised by the order components themselves.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderError {
    #[error("invalid item id: {0}")]
    InvalidItem(String),
}
