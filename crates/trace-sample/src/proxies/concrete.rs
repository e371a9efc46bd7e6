//! Concrete-wrapper strategy.
//!
//! For targets with no trait surface there is nothing to implement, so the
//! wrapper mirrors the target's inherent methods instead and delegates to an
//! internally held instance. Without inheritance the wrapper cannot *be* the
//! target type: the composition root hands callers the wrapper in the
//! target's place, which costs one wrapper per traced concrete type.

use crate::app::{ConcreteLogic, OrderError};
use std::sync::Arc;
use trace_framework::Tracer;

/// Stands in for [`ConcreteLogic`] wherever the composition root says so.
pub struct ConcreteLogicTraceProxy {
    target: ConcreteLogic,
    tracer: Arc<dyn Tracer>,
}

impl ConcreteLogicTraceProxy {
    pub fn new(target: ConcreteLogic, tracer: Arc<dyn Tracer>) -> Self {
        Self { target, tracer }
    }

    pub async fn operation(&self, item_id: &str) -> Result<String, OrderError> {
        let status = self.tracer.begin("ConcreteLogic.operation");
        match self.target.operation(item_id).await {
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
