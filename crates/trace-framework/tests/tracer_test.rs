use std::sync::Arc;
use trace_framework::mock::RecordingSink;
use trace_framework::{current_trace_id, trace_scope, TaskLocalTracer, TraceEvent, Tracer};

fn recording_tracer() -> (Arc<TaskLocalTracer>, RecordingSink) {
    let sink = RecordingSink::new();
    let tracer = Arc::new(TaskLocalTracer::with_sink(Arc::new(sink.clone())));
    (tracer, sink)
}

#[tokio::test]
async fn nested_begins_share_transaction_and_count_levels() {
    let (tracer, sink) = recording_tracer();

    trace_scope(async {
        let first = tracer.begin("a");
        let second = tracer.begin("b");
        let third = tracer.begin("c");

        tracer.end(third);
        tracer.end(second);
        tracer.end(first);
    })
    .await;

    let begins = sink.begins();
    assert_eq!(begins.len(), 3);
    let transaction = begins[0].transaction_id().to_string();
    for (depth, id) in begins.iter().enumerate() {
        assert_eq!(id.transaction_id(), transaction);
        assert_eq!(id.level(), depth);
    }
}

#[tokio::test]
async fn end_restores_the_callers_level() {
    let (tracer, _sink) = recording_tracer();

    trace_scope(async {
        assert_eq!(current_trace_id(), None);

        let outer = tracer.begin("outer");
        let before_inner = current_trace_id().unwrap();

        let inner = tracer.begin("inner");
        assert_eq!(current_trace_id().unwrap().level(), 1);
        tracer.end(inner);

        assert_eq!(current_trace_id().unwrap(), before_inner);
        tracer.end(outer);

        // Chain root returned: context is unset again.
        assert_eq!(current_trace_id(), None);
    })
    .await;
}

#[tokio::test]
async fn exception_restores_the_level_like_end() {
    let (tracer, sink) = recording_tracer();

    trace_scope(async {
        let outer = tracer.begin("outer");
        let inner = tracer.begin("inner");
        tracer.exception(inner, &"boom");

        // A sibling call after the failure nests at the same depth again,
        // in the same chain.
        let sibling = tracer.begin("sibling");
        assert_eq!(sibling.trace_id().level(), 1);
        assert_eq!(
            sibling.trace_id().transaction_id(),
            outer.trace_id().transaction_id()
        );
        tracer.end(sibling);
        tracer.end(outer);
    })
    .await;

    let events = sink.events();
    let exceptions: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, TraceEvent::Exception { .. }))
        .collect();
    assert_eq!(exceptions.len(), 1);
    assert_eq!(exceptions[0].message(), "inner");
}

#[tokio::test]
async fn separate_scopes_are_separate_chains() {
    let (tracer, sink) = recording_tracer();

    trace_scope(async {
        let status = tracer.begin("first");
        tracer.end(status);
    })
    .await;
    trace_scope(async {
        let status = tracer.begin("second");
        tracer.end(status);
    })
    .await;

    let begins = sink.begins();
    assert_eq!(begins.len(), 2);
    assert_ne!(begins[0].transaction_id(), begins[1].transaction_id());
    assert_eq!(begins[0].level(), 0);
    assert_eq!(begins[1].level(), 0);
}

#[tokio::test]
async fn begin_outside_a_scope_degrades_to_root_calls() {
    let (tracer, sink) = recording_tracer();

    // No trace_scope: each call is its own root chain, nothing panics.
    let first = tracer.begin("first");
    let second = tracer.begin("second");
    tracer.end(second);
    tracer.end(first);

    let begins = sink.begins();
    assert_eq!(begins.len(), 2);
    assert_eq!(begins[0].level(), 0);
    assert_eq!(begins[1].level(), 0);
    assert_ne!(begins[0].transaction_id(), begins[1].transaction_id());
}

#[tokio::test]
async fn concurrent_tasks_never_observe_each_other() {
    let (tracer, sink) = recording_tracer();

    let mut handles = Vec::new();
    for _ in 0..2 {
        let tracer = tracer.clone();
        handles.push(tokio::spawn(trace_scope(async move {
            let a = tracer.begin("a");
            let b = tracer.begin("b");
            let c = tracer.begin("c");
            tokio::task::yield_now().await;
            tracer.end(c);
            tracer.end(b);
            tracer.end(a);
        })));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let grouped = sink.events_by_transaction();
    assert_eq!(grouped.len(), 2, "each task gets its own transaction");

    for events in grouped.values() {
        let begins: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Begin { .. }))
            .collect();
        let ends: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, TraceEvent::End { .. }))
            .collect();
        assert_eq!(begins.len(), 3);
        assert_eq!(ends.len(), 3);
        for (depth, event) in begins.iter().enumerate() {
            assert_eq!(event.trace_id().level(), depth);
        }
    }
}

#[tokio::test]
async fn elapsed_time_is_measured_from_begin() {
    let (tracer, sink) = recording_tracer();

    trace_scope(async {
        let status = tracer.begin("slow");
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        tracer.end(status);
    })
    .await;

    match &sink.events()[1] {
        TraceEvent::End { elapsed, .. } => assert!(elapsed.as_millis() >= 20),
        other => panic!("expected end event, got {other:?}"),
    }
}
