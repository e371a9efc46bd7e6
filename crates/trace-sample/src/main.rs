//! Demo binary: wires the auto-instrumented order chain, then runs one
//! successful request and one failing request, each as its own logical call
//! chain. Run with `RUST_LOG=info cargo run` to see the nested trace lines.

use std::sync::Arc;
use std::time::Duration;
use trace_framework::{
    setup_tracing, trace_scope, AutoInstrumenter, Pointcut, TaskLocalTracer, TraceAdvisor, Tracer,
};
use trace_sample::{app, wiring};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    setup_tracing();

    let tracer: Arc<dyn Tracer> = Arc::new(TaskLocalTracer::new());
    let advisor = TraceAdvisor::new(Pointcut::new(["request*", "order*", "save*"]), tracer);
    let instrumenter = AutoInstrumenter::new(app::NAMESPACE, advisor);

    let controller = wiring::auto_instrumented(&instrumenter, Duration::from_millis(100));

    info!("placing a valid order");
    trace_scope(async {
        match controller.request("item-1").await {
            Ok(result) => info!(result = %result, "order accepted"),
            Err(e) => error!(error = %e, "order rejected"),
        }
    })
    .await;

    info!("placing a poison order");
    trace_scope(async {
        if let Err(e) = controller.request("ex").await {
            error!(error = %e, "order rejected");
        }
    })
    .await;
}
