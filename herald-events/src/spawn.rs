//! Task spawning for per-listener dispatch
//!
//! When a dispatcher runs in per-listener task mode, every listener
//! invocation is handed to a [`Spawner`] as an independent task. The
//! dispatcher never awaits or cancels these tasks.
//!
//! | Spawner          | Runs tasks on                                         |
//! |------------------|-------------------------------------------------------|
//! | `DefaultSpawner` | the current tokio runtime if any, else a new thread   |
//! | `TokioSpawner`   | the blocking pool of a captured tokio runtime         |
//! | `ThreadSpawner`  | a dedicated OS thread per task                        |

use crate::error::SpawnError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tokio::runtime::Handle;

/// A unit of listener work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Name given to threads created by [`ThreadSpawner`].
pub const LISTENER_THREAD_NAME: &str = "herald-listener";

/// Launches listener invocations as concurrent tasks.
///
/// Returning `Err` means the task was dropped without running; the
/// dispatcher then invokes the listener inline instead.
pub trait Spawner: Send + Sync {
    /// Launch `task` without waiting for it.
    fn spawn(&self, task: Task) -> Result<(), SpawnError>;
}

/// One OS thread per task.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawner for ThreadSpawner {
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        thread::Builder::new()
            .name(LISTENER_THREAD_NAME.to_string())
            .spawn(task)?;
        Ok(())
    }
}

/// Runs tasks on a tokio runtime's blocking pool.
///
/// Listener bodies are synchronous, so they go through `spawn_blocking`
/// rather than occupying async worker threads.
///
/// A handle can outlive its runtime. Once the runtime has shut down, tokio
/// cancels new blocking tasks without running them; that case is reported
/// as [`SpawnError::RuntimeUnavailable`].
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: Handle,
}

impl TokioSpawner {
    /// Spawner bound to a specific runtime.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Spawner bound to the runtime the caller is running on.
    pub fn current() -> Result<Self, SpawnError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SpawnError::RuntimeUnavailable)
    }
}

impl Spawner for TokioSpawner {
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let join = self.handle.spawn_blocking(move || {
            flag.store(true, Ordering::Release);
            task();
        });

        // A shut-down blocking pool completes the handle as cancelled before
        // `spawn_blocking` returns.
        if join.is_finished() && !started.load(Ordering::Acquire) {
            return Err(SpawnError::RuntimeUnavailable);
        }
        Ok(())
    }
}

/// Picks the ambient tokio runtime at spawn time, falling back to threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSpawner;

impl Spawner for DefaultSpawner {
    fn spawn(&self, task: Task) -> Result<(), SpawnError> {
        match Handle::try_current() {
            Ok(handle) => TokioSpawner::new(handle).spawn(task),
            Err(_) => ThreadSpawner.spawn(task),
        }
    }
}
