//! Type-safe, in-process event dispatch for Herald
//!
//! Listeners are registered on a [`Builder`], which is then frozen into an
//! [`Events`] dispatcher. Emitting an event invokes every listener
//! registered for its type, plus every wildcard listener.
//!
//! ## Features
//!
//! - **Typed listeners** - Routed by the event's Rust type, no manual keys
//! - **Wildcard listeners** - Observe every event (logging, metrics, audit)
//! - **Frozen dispatch table** - `build()` snapshots the registry; the
//!   dispatcher is immutable and cheap to clone across threads
//! - **Sync or per-listener tasks** - Run listeners inline, or spawn each one
//!   through a pluggable [`Spawner`]
//!
//! ## Quick Start
//!
//! ```rust
//! use herald_events::Builder;
//!
//! #[derive(Debug)]
//! struct OrderPlaced {
//!     id: u64,
//! }
//!
//! let events = Builder::new()
//!     .listen(|order: &OrderPlaced| println!("charging order {}", order.id))
//!     .listen(|order: &OrderPlaced| println!("emailing receipt for {}", order.id))
//!     .listen_to_all(|event| println!("saw {}", event.type_name()))
//!     .build();
//!
//! events.emit(OrderPlaced { id: 42 });
//! ```
//!
//! ## Dispatch order
//!
//! In the default synchronous mode, `emit` runs the wildcard listeners first
//! and then the typed listeners, each in registration order, and returns
//! once all of them have returned.
//!
//! ## Re-emitting from a listener
//!
//! ```rust
//! use herald_events::{Builder, Events};
//!
//! struct OrderPlaced { id: u64 }
//! struct InvoiceIssued { order: u64 }
//!
//! let events = Builder::new()
//!     .listen_with_emitter(|events: &Events, order: &OrderPlaced| {
//!         events.emit(InvoiceIssued { order: order.id });
//!     })
//!     .listen(|invoice: &InvoiceIssued| println!("invoice for {}", invoice.order))
//!     .build();
//!
//! events.emit(OrderPlaced { id: 7 });
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use herald_events::{Builder, DispatchConfig};
//!
//! # fn main() -> Result<(), herald_events::ConfigError> {
//! let events = Builder::new()
//!     .with_config(DispatchConfig::from_env()?) // HERALD_PER_LISTENER_TASKS, HERALD_LOG_DISPATCH
//!     .enable_logging(false)
//!     .build();
//! # let _ = events;
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-listener tasks
//!
//! ```rust
//! use herald_events::{Builder, ThreadSpawner};
//!
//! struct Heartbeat;
//!
//! let events = Builder::new()
//!     .per_listener_tasks(true)
//!     .with_spawner(ThreadSpawner)
//!     .listen(|_: &Heartbeat| { /* runs on its own thread */ })
//!     .build();
//!
//! // Returns as soon as the listener task is launched
//! events.emit(Heartbeat);
//! ```
//!
//! ## Sealed listener table
//!
//! The dispatcher owns its listeners. Host code can count them but cannot
//! reach or invoke them directly, so a listener only ever sees events of the
//! type it registered for.
//!
//! ```compile_fail
//! use herald_events::Builder;
//!
//! struct Ping;
//!
//! let events = Builder::new().listen(|_: &Ping| {}).build();
//! let _ = events.registry();
//! ```
//!
//! ```compile_fail
//! use herald_events::ErasedListener;
//! ```

pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod identity;
pub(crate) mod listener;
pub(crate) mod registry;
pub mod spawn;

pub use builder::Builder;
pub use config::{DispatchConfig, ENV_LOG_DISPATCH, ENV_PER_LISTENER_TASKS};
pub use dispatcher::Events;
pub use error::{ConfigError, SpawnError};
pub use event::{AnyEvent, Payload};
pub use identity::{TypeIdentity, identity_of, identity_of_value};
pub use spawn::{DefaultSpawner, Spawner, Task, ThreadSpawner, TokioSpawner};
