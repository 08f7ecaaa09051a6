//! Order Pipeline Demo
//!
//! Wires a small checkout flow through a Herald dispatcher: typed listeners
//! for each step, a listener that re-emits follow-up events, and a wildcard
//! audit listener. Run with `RUST_LOG=herald_events=trace` to see dispatch
//! logging.
//!
//! Run with: cargo run --example order_pipeline

use herald::{AnyEvent, Builder, DispatchConfig, Events};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct OrderPlaced {
    id: u64,
    total_cents: u64,
}

#[derive(Debug, Clone)]
struct PaymentCaptured {
    order: u64,
    amount_cents: u64,
}

#[derive(Debug, Clone)]
struct OrderShipped {
    order: u64,
}

fn payments(builder: Builder) -> Builder {
    builder.listen_with_emitter(|events: &Events, order: &OrderPlaced| {
        info!(order = order.id, "Capturing payment");
        events.emit(PaymentCaptured {
            order: order.id,
            amount_cents: order.total_cents,
        });
    })
}

fn fulfilment(builder: Builder) -> Builder {
    builder.listen_with_emitter(|events: &Events, payment: &PaymentCaptured| {
        info!(order = payment.order, "Shipping order");
        events.emit(OrderShipped {
            order: payment.order,
        });
    })
}

fn audit(event: &AnyEvent) {
    info!(event = event.type_name(), "audit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DispatchConfig::from_env()?;
    let revenue = Arc::new(AtomicU64::new(0));
    let revenue_listener = revenue.clone();

    let events = Builder::new()
        .with_config(config)
        .wrap(payments)
        .wrap(fulfilment)
        .listen(move |payment: &PaymentCaptured| {
            revenue_listener.fetch_add(payment.amount_cents, Ordering::SeqCst);
        })
        .listen(|shipped: &OrderShipped| info!(order = shipped.order, "Order complete"))
        .listen_to_all(audit)
        .build();

    for (id, total_cents) in [(1, 1_999), (2, 4_500), (3, 250)] {
        events.emit(OrderPlaced { id, total_cents });
    }

    if events.is_concurrent() {
        // Listener tasks are not awaited by emit
        std::thread::sleep(Duration::from_millis(200));
    }

    info!(
        revenue_cents = revenue.load(Ordering::SeqCst),
        "Processed orders"
    );
    Ok(())
}
