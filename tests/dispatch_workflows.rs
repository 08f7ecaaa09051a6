//! Integration tests for common Herald dispatch workflows.
//!
//! These tests exercise the public API end to end: registration, freezing,
//! emission in both dispatch modes, and wildcard delivery.

use herald::prelude::*;
use herald::ThreadSpawner;
use herald_testing::{
    Recorder, assert_eventually, assert_recorded, assert_recorded_unordered,
    assert_recorded_within,
};
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct OrderPlaced {
    id: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct OrderRefunded {
    id: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct Shipment {
    order: u64,
}

// =============================================================================
// Type identity
// =============================================================================

#[test]
fn test_type_key_agreement() {
    let order = OrderPlaced { id: 1 };
    assert_eq!(identity_of_value(&order), identity_of::<OrderPlaced>());
    assert_eq!(identity_of_value(&9u16), identity_of::<u16>());

    let handle = Arc::new(order);
    assert_eq!(identity_of_value(&handle), identity_of::<Arc<OrderPlaced>>());
    assert_ne!(identity_of_value(&handle), identity_of::<OrderPlaced>());

    let erased: Box<dyn Any + Send + Sync> = Box::new(OrderRefunded { id: 1 });
    assert_eq!(identity_of_value(&*erased), identity_of::<OrderRefunded>());
}

// =============================================================================
// Synchronous dispatch
// =============================================================================

#[test]
fn test_order_placed_scenario() {
    let calls: Recorder<String> = Recorder::new();
    let wildcard_payloads: Recorder<Option<OrderPlaced>> = Recorder::new();

    let (h1, h2, wc) = (calls.clone(), calls.clone(), calls.clone());
    let events = Builder::new()
        .with_goroutine_per_listener(false)
        .listen(move |o: &OrderPlaced| h1.record(format!("h1:{}", o.id)))
        .listen(move |o: &OrderPlaced| h2.record(format!("h2:{}", o.id)))
        .listen_to_all(move |e| wc.record(format!("wc:{}", e.type_name())))
        .listen_to_all(wildcard_payloads.hook_all(|e| e.downcast_ref::<OrderPlaced>().cloned()))
        .build();

    events.emit(OrderPlaced { id: 42 });

    let entries = calls.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].starts_with("wc:") && entries[0].ends_with("OrderPlaced"));
    assert_eq!(entries[1], "h1:42");
    assert_eq!(entries[2], "h2:42");
    assert_recorded(&wildcard_payloads, &[Some(OrderPlaced { id: 42 })]);
}

#[test]
fn test_duplicate_listeners_all_invoked() {
    let count = Arc::new(AtomicUsize::new(0));
    let listener = {
        let count = count.clone();
        move |_: &OrderPlaced| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    };

    let events = Builder::new()
        .listen(listener.clone())
        .listen(listener.clone())
        .listen(listener)
        .build();
    events.emit(OrderPlaced { id: 1 });

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_same_shape_types_are_isolated() {
    let placed = Recorder::new();
    let refunded = Recorder::new();

    let events = Builder::new()
        .listen(placed.hook(|o: &OrderPlaced| o.id))
        .listen(refunded.hook(|o: &OrderRefunded| o.id))
        .build();

    events.emit(OrderRefunded { id: 5 });
    events.emit(OrderPlaced { id: 6 });

    assert_recorded(&placed, &[6]);
    assert_recorded(&refunded, &[5]);
}

#[test]
fn test_wildcard_sees_every_type() {
    let names = Recorder::new();

    let events = Builder::new()
        .listen_to_all(names.hook_all(|e| e.identity()))
        .build();

    events.emit(OrderPlaced { id: 1 });
    events.emit(Shipment { order: 1 });
    events.emit(17i32);
    events.emit_any(Box::new(OrderRefunded { id: 1 }));

    assert_recorded(
        &names,
        &[
            identity_of::<OrderPlaced>(),
            identity_of::<Shipment>(),
            identity_of::<i32>(),
            identity_of::<OrderRefunded>(),
        ],
    );
}

#[test]
fn test_runtime_typed_events_report_dynamic_name() {
    let seen = Recorder::new();

    let events = Builder::new()
        .listen_to_all(seen.hook_all(|e| (e.type_name(), e.is::<OrderRefunded>())))
        .build();

    events.emit(OrderRefunded { id: 1 });
    events.emit_any(Box::new(OrderRefunded { id: 2 }));
    events.emit_arc(Arc::new(OrderRefunded { id: 3 }));

    let entries = seen.entries();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].0.ends_with("OrderRefunded"));
    assert_eq!(entries[1], ("<dynamic>", true));
    assert_eq!(entries[2], ("<dynamic>", true));
}

#[test]
fn test_emit_without_listeners() {
    let events = Builder::new().build();
    events.emit(OrderPlaced { id: 1 });
    events.emit_any(Box::new(()));
    assert!(!events.has_listeners::<OrderPlaced>());
    assert_eq!(events.wildcard_count(), 0);
}

#[test]
fn test_builder_changes_after_build_are_invisible() {
    let early = Recorder::new();
    let late = Recorder::new();

    let builder = Builder::new().listen(early.hook(|o: &OrderPlaced| o.id));
    let events = builder.build();
    let _builder = builder
        .listen(late.hook(|o: &OrderPlaced| o.id))
        .listen_to_all(late.hook_all(|_| 0));

    events.emit(OrderPlaced { id: 1 });

    assert_recorded(&early, &[1]);
    assert!(late.is_empty());
}

#[test]
fn test_forward_between_dispatchers() {
    let audited = Recorder::new();
    let audit = Builder::new()
        .listen(audited.hook(|s: &Shipment| s.order))
        .build();

    let forward_to = audit.clone();
    let events = Builder::new()
        .listen_to_all(move |e| forward_to.emit_event(e.clone()))
        .build();

    events.emit(Shipment { order: 12 });
    events.emit(OrderPlaced { id: 13 });

    assert_recorded(&audited, &[12]);
}

#[test]
fn test_reusable_bundles() {
    fn shipping(recorder: Recorder<u64>) -> impl FnOnce(Builder) -> Builder {
        move |builder: Builder| {
            builder.listen_with_emitter(move |events, o: &OrderPlaced| {
                recorder.record(o.id);
                events.emit(Shipment { order: o.id });
            })
        }
    }

    let orders = Recorder::new();
    let shipments = Recorder::new();

    let events = Builder::new()
        .wrap(shipping(orders.clone()))
        .listen(shipments.hook(|s: &Shipment| s.order))
        .build();

    events.emit(OrderPlaced { id: 8 });

    assert_recorded(&orders, &[8]);
    assert_recorded(&shipments, &[8]);
}

// =============================================================================
// Per-listener tasks
// =============================================================================

#[test]
fn test_concurrent_emit_does_not_wait_for_listeners() {
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let gate = Arc::new(Gate::new(release_rx));
    let finished = Arc::new(AtomicBool::new(false));

    let events = {
        let gate = gate.clone();
        let finished = finished.clone();
        Builder::new()
            .with_goroutine_per_listener(true)
            .with_spawner(ThreadSpawner)
            .listen(move |_: &OrderPlaced| {
                gate.wait(TIMEOUT);
                finished.store(true, Ordering::SeqCst);
            })
            .build()
    };

    let start = Instant::now();
    events.emit(OrderPlaced { id: 1 });
    assert!(start.elapsed() < TIMEOUT);
    assert!(!finished.load(Ordering::SeqCst));

    release_tx.send(()).unwrap();
    assert_eventually(TIMEOUT, || finished.load(Ordering::SeqCst), "slow listener should finish");
}

#[test]
fn test_concurrent_delivers_to_all_listeners() {
    let seen = Recorder::new();

    let events = Builder::new()
        .per_listener_tasks(true)
        .listen(seen.hook(|o: &OrderPlaced| format!("a{}", o.id)))
        .listen(seen.hook(|o: &OrderPlaced| format!("b{}", o.id)))
        .listen_to_all(seen.hook_all(|_| "all".to_string()))
        .build();

    events.emit(OrderPlaced { id: 1 });

    assert_recorded_within(&seen, 3, TIMEOUT);
    assert_recorded_unordered(&seen, &["a1".to_string(), "b1".to_string(), "all".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_on_tokio_runtime() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let events = Builder::new()
        .per_listener_tasks(true)
        .listen(move |o: &OrderPlaced| {
            let _ = tx.send(o.id);
        })
        .build();

    let shared = events.clone();
    tokio::task::spawn_blocking(move || shared.emit(OrderPlaced { id: 3 }))
        .await
        .unwrap();
    events.emit(OrderPlaced { id: 4 });

    let mut ids = Vec::new();
    for _ in 0..2 {
        let id = tokio::time::timeout(TIMEOUT, rx.recv()).await.unwrap().unwrap();
        ids.push(id);
    }
    ids.sort_unstable();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn test_dispatcher_shared_across_threads() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let events = Builder::new()
        .listen(move |_: &OrderPlaced| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let events = events.clone();
            std::thread::spawn(move || {
                for id in 0..25 {
                    events.emit(OrderPlaced { id: i * 100 + id });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(count.load(Ordering::SeqCst), 100);
}

#[test]
fn test_config_drives_policy() {
    let config: DispatchConfig =
        serde_json::from_str(r#"{ "per_listener_tasks": true, "enable_logging": false }"#).unwrap();
    let events = Builder::new().with_config(config).build();

    assert!(events.is_concurrent());
    assert!(!events.config().enable_logging);
}

/// Blocks a listener until the test releases it.
struct Gate(Mutex<mpsc::Receiver<()>>);

impl Gate {
    fn new(rx: mpsc::Receiver<()>) -> Self {
        Self(Mutex::new(rx))
    }

    fn wait(&self, timeout: Duration) {
        let _ = self.0.lock().unwrap().recv_timeout(timeout);
    }
}
