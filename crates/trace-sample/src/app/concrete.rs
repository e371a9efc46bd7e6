//! A component with no trait surface.
//!
//! Callers of [`ConcreteLogic`] depend on the concrete type, so neither the
//! interface-proxy nor the generic strategy can stand in for it; the
//! concrete-wrapper strategy in
//! [`proxies::concrete`](crate::proxies::concrete) covers this case.

use crate::app::OrderError;

pub struct ConcreteLogic;

impl ConcreteLogic {
    pub fn new() -> Self {
        Self
    }

    pub async fn operation(&self, item_id: &str) -> Result<String, OrderError> {
        if item_id == "ex" {
            return Err(OrderError::InvalidItem(item_id.to_string()));
        }
        Ok("data".to_string())
    }
}

impl Default for ConcreteLogic {
    fn default() -> Self {
        Self::new()
    }
}
