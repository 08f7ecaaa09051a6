// Polling helpers for asserting on work that completes on other threads

use std::thread;
use std::time::{Duration, Instant};

/// Interval between condition checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Poll `condition` until it holds or `timeout` elapses.
///
/// Returns whether the condition was observed to hold.
pub fn wait_until<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Assert that `condition` holds within `timeout`
pub fn assert_eventually<F>(timeout: Duration, condition: F, message: &str)
where
    F: FnMut() -> bool,
{
    assert!(
        wait_until(timeout, condition),
        "Condition not met within {:?}: {}",
        timeout,
        message
    );
}
