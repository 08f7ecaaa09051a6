// Recording listeners for testing

use herald_events::AnyEvent;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::wait::wait_until;

/// Thread-safe log of values observed by listeners
///
/// Clones share the same log, so one clone can be moved into a listener
/// while the test keeps another to inspect.
#[derive(Debug)]
pub struct Recorder<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a value
    pub fn record(&self, value: T) {
        self.entries.lock().push(value);
    }

    /// Number of recorded values
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all recorded values
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Block until at least `count` values are recorded or `timeout` passes
    pub fn wait_for_len(&self, count: usize, timeout: Duration) -> bool {
        wait_until(timeout, || self.len() >= count)
    }
}

impl<T: Clone> Recorder<T> {
    /// Snapshot of the recorded values, in recording order
    pub fn entries(&self) -> Vec<T> {
        self.entries.lock().clone()
    }
}

impl<T: Send + 'static> Recorder<T> {
    /// Typed listener that records `map(event)`
    pub fn hook<E, M>(&self, map: M) -> impl Fn(&E) + Send + Sync + 'static
    where
        E: 'static,
        M: Fn(&E) -> T + Send + Sync + 'static,
    {
        let recorder = self.clone();
        move |event: &E| recorder.record(map(event))
    }

    /// Wildcard listener that records `map(event)`
    pub fn hook_all<M>(&self, map: M) -> impl Fn(&AnyEvent) + Send + Sync + 'static
    where
        M: Fn(&AnyEvent) -> T + Send + Sync + 'static,
    {
        let recorder = self.clone();
        move |event: &AnyEvent| recorder.record(map(event))
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
