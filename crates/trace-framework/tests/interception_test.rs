use async_trait::async_trait;
use std::sync::Arc;
use trace_framework::mock::RecordingSink;
use trace_framework::{
    trace_scope, AutoInstrumenter, Pointcut, TaskLocalTracer, TraceAdvisor, TraceEvent, Traced,
    Tracer,
};

// --- Test Capability ---

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("no greeting for {0}")]
struct GreetError(String);

#[async_trait]
trait Greeter: Send + Sync {
    async fn greet(&self, name: &str) -> Result<String, GreetError>;
    async fn shout(&self, name: &str) -> Result<String, GreetError>;
}

struct EnglishGreeter;

#[async_trait]
impl Greeter for EnglishGreeter {
    async fn greet(&self, name: &str) -> Result<String, GreetError> {
        if name.is_empty() {
            return Err(GreetError("<empty>".to_string()));
        }
        Ok(format!("hello, {name}"))
    }

    async fn shout(&self, name: &str) -> Result<String, GreetError> {
        Ok(format!("HELLO, {}", name.to_uppercase()))
    }
}

// Transparency impl: one `invoke` call per operation.
#[async_trait]
impl<T: Greeter + ?Sized> Greeter for Traced<T> {
    async fn greet(&self, name: &str) -> Result<String, GreetError> {
        self.invoke("greet", |target| target.greet(name)).await
    }

    async fn shout(&self, name: &str) -> Result<String, GreetError> {
        self.invoke("shout", |target| target.shout(name)).await
    }
}

fn recording_advisor(pointcut: Pointcut) -> (TraceAdvisor, RecordingSink) {
    let sink = RecordingSink::new();
    let tracer: Arc<dyn Tracer> = Arc::new(TaskLocalTracer::with_sink(Arc::new(sink.clone())));
    (TraceAdvisor::new(pointcut, tracer), sink)
}

// --- Generic interception ---

#[tokio::test]
async fn traced_call_returns_the_value_unchanged() {
    let (advisor, sink) = recording_advisor(Pointcut::any());
    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let traced = Traced::new(greeter, advisor);

    let reply = trace_scope(async { traced.greet("alice").await }).await;

    assert_eq!(reply.unwrap(), "hello, alice");
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], TraceEvent::Begin { .. }));
    assert!(matches!(&events[1], TraceEvent::End { .. }));
    assert_eq!(
        events[0].trace_id().transaction_id(),
        events[1].trace_id().transaction_id()
    );
    assert_eq!(events[0].trace_id().level(), 0);
    // Label derived from the capability surface, not the wrapper.
    assert_eq!(events[0].message(), "Greeter.greet");
}

#[tokio::test]
async fn traced_failure_is_reraised_unchanged() {
    let (advisor, sink) = recording_advisor(Pointcut::any());
    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let traced = Traced::new(greeter, advisor);

    let reply = trace_scope(async { traced.greet("").await }).await;

    assert_eq!(reply.unwrap_err(), GreetError("<empty>".to_string()));
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], TraceEvent::Begin { .. }));
    match &events[1] {
        TraceEvent::Exception { error, .. } => assert_eq!(error, "no greeting for <empty>"),
        other => panic!("expected exception event, got {other:?}"),
    }
}

#[tokio::test]
async fn pointcut_rejection_means_pure_delegation() {
    let (advisor, sink) = recording_advisor(Pointcut::new(["greet"]));
    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let traced = Traced::new(greeter, advisor);

    let reply = trace_scope(async { traced.shout("bob").await }).await;

    assert_eq!(reply.unwrap(), "HELLO, BOB");
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn concrete_target_label_uses_its_type_name() {
    let (advisor, sink) = recording_advisor(Pointcut::any());
    let traced = Traced::new(Arc::new(EnglishGreeter), advisor);

    trace_scope(async { traced.greet("carol").await })
        .await
        .unwrap();

    assert_eq!(sink.events()[0].message(), "EnglishGreeter.greet");
}

// --- Automatic instrumentation ---

#[tokio::test]
async fn matching_namespace_is_wrapped() {
    let (advisor, sink) = recording_advisor(Pointcut::any());
    let instrumenter = AutoInstrumenter::new("app::v2", advisor);

    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let greeter = instrumenter.post_process(greeter, "app::v2::greeting", |wrapped| {
        wrapped as Arc<dyn Greeter>
    });

    let reply = trace_scope(async { greeter.greet("dave").await }).await;

    assert_eq!(reply.unwrap(), "hello, dave");
    assert_eq!(sink.events().len(), 2, "wrapper produces trace events");
}

#[tokio::test]
async fn non_matching_namespace_is_returned_untouched() {
    let (advisor, sink) = recording_advisor(Pointcut::any());
    let instrumenter = AutoInstrumenter::new("app::v2", advisor);

    let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
    let same = instrumenter.post_process(greeter.clone(), "app::other::greeting", |wrapped| {
        wrapped as Arc<dyn Greeter>
    });

    assert!(
        Arc::ptr_eq(&greeter, &same),
        "candidate outside the selector is reference-identical"
    );

    let reply = trace_scope(async { same.greet("erin").await }).await;
    assert_eq!(reply.unwrap(), "hello, erin");
    assert!(sink.events().is_empty(), "no tracing side effect");
}
