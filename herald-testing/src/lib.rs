//! Testing utilities for Herald event dispatchers.
//!
//! ## Features
//!
//! - **Recorder** - Thread-safe log of values seen by listeners
//! - **Hooks** - Build typed or wildcard listeners that record into a `Recorder`
//! - **Polling** - Wait for work finishing on other threads, with a timeout
//! - **Assertions** - Ordered and unordered checks over recorded values
//!
//! ## Recording listener calls
//!
//! ```
//! use herald_events::Builder;
//! use herald_testing::{Recorder, assert_recorded};
//!
//! #[derive(Clone)]
//! struct Deposit(u64);
//!
//! let amounts = Recorder::new();
//! let events = Builder::new()
//!     .listen(amounts.hook(|d: &Deposit| d.0))
//!     .build();
//!
//! events.emit(Deposit(10));
//! events.emit(Deposit(5));
//!
//! assert_recorded(&amounts, &[10, 5]);
//! ```
//!
//! ## Per-listener tasks
//!
//! ```
//! use std::time::Duration;
//! use herald_events::Builder;
//! use herald_testing::{Recorder, assert_recorded_within};
//!
//! struct Ping;
//!
//! let pings = Recorder::new();
//! let events = Builder::new()
//!     .per_listener_tasks(true)
//!     .listen(pings.hook(|_: &Ping| ()))
//!     .build();
//!
//! events.emit(Ping);
//! assert_recorded_within(&pings, 1, Duration::from_secs(5));
//! ```

mod assertions;
mod recorder;
mod wait;

pub use assertions::{assert_recorded, assert_recorded_unordered, assert_recorded_within};
pub use recorder::Recorder;
pub use wait::{POLL_INTERVAL, assert_eventually, wait_until};
